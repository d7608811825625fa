use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::ExpenseSlice;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

/// Slice colors, reused cyclically when there are more categories than
/// palette entries.
const PALETTE: [RGBColor; 7] = [
    RGBColor(0x63, 0x66, 0xf1),
    RGBColor(0x10, 0xb9, 0x81),
    RGBColor(0xef, 0x44, 0x44),
    RGBColor(0xf5, 0x9e, 0x0b),
    RGBColor(0x8b, 0x5c, 0xf6),
    RGBColor(0xec, 0x48, 0x99),
    RGBColor(0x14, 0xb8, 0xa6),
];

/// Same palette as CSS hex strings for the HTML legend.
const PALETTE_HEX: [&str; 7] = [
    "#6366f1", "#10b981", "#ef4444", "#f59e0b", "#8b5cf6", "#ec4899", "#14b8a6",
];

fn slice_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

fn slice_hex(index: usize) -> &'static str {
    PALETTE_HEX[index % PALETTE_HEX.len()]
}

#[derive(Properties, PartialEq)]
pub struct CategoryChartProps {
    pub slices: Vec<ExpenseSlice>,
}

/// Pie chart of expense totals per category, drawn onto a canvas with
/// plotters. An HTML legend sits next to the canvas because canvas text
/// does not reflow with the page.
pub struct CategoryChart {
    canvas_ref: NodeRef,
}

impl Component for CategoryChart {
    type Message = ();
    type Properties = CategoryChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().slices != old_props.slices {
            self.draw(&ctx.props().slices);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !ctx.props().slices.is_empty() {
            self.draw(&ctx.props().slices);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let slices = &ctx.props().slices;

        if slices.is_empty() {
            return html! {
                <div class="chart-empty">{"No data to display"}</div>
            };
        }

        html! {
            <div class="category-chart">
                <canvas
                    ref={self.canvas_ref.clone()}
                    width="360"
                    height="300"
                ></canvas>
                <ul class="chart-legend">
                    {for slices.iter().enumerate().map(|(index, slice)| html! {
                        <li class="chart-legend-item">
                            <span
                                class="chart-legend-swatch"
                                style={format!("background-color: {};", slice_hex(index))}
                            ></span>
                            <span class="chart-legend-label">{&slice.label}</span>
                            <span class="chart-legend-amount">
                                {format!("${:.2}", slice.amount)}
                            </span>
                        </li>
                    })}
                </ul>
            </div>
        }
    }
}

impl CategoryChart {
    fn draw(&self, slices: &[ExpenseSlice]) {
        if slices.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };

        canvas.set_width(360);
        canvas.set_height(300);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };

        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let center = (180, 150);
        let radius = 120.0;
        let sizes: Vec<f64> = slices.iter().map(|slice| slice.amount).collect();
        let colors: Vec<RGBColor> = (0..slices.len()).map(slice_color).collect();
        let labels: Vec<String> = slices.iter().map(|slice| slice.label.clone()).collect();

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.start_angle(-90.0);
        pie.label_style(("sans-serif", 14).into_font().color(&RGBColor(71, 85, 105)));
        pie.percentages(("sans-serif", 12).into_font().color(&WHITE));

        if root.draw(&pie).is_err() {
            return;
        }
        let _ = root.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_wraps_past_its_length() {
        assert_eq!(slice_color(0), slice_color(PALETTE.len()));
        assert_eq!(slice_color(2), slice_color(PALETTE.len() + 2));
        assert_eq!(slice_hex(1), slice_hex(PALETTE_HEX.len() + 1));
    }

    #[test]
    fn hex_legend_matches_canvas_palette() {
        for (index, hex) in PALETTE_HEX.iter().enumerate() {
            let value = u32::from_str_radix(&hex[1..], 16).unwrap();
            let expected = RGBColor(
                ((value >> 16) & 0xff) as u8,
                ((value >> 8) & 0xff) as u8,
                (value & 0xff) as u8,
            );
            assert_eq!(slice_color(index), expected);
        }
    }
}
