// Dweve Benchlens - Benchmark run analysis toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shared plotters setup: SVG rendering, palette, fonts and axes.

use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontStyle;
use std::io;
use std::ops::Range;

pub(crate) type Area<'b> = DrawingArea<SVGBackend<'b>, Shift>;
pub(crate) type DrawResult = Result<(), DrawingAreaErrorKind<io::Error>>;
pub(crate) type ValueChart<'a, 'b> =
    ChartContext<'a, SVGBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

const FONT: &str = "sans-serif";

/// Stroke color of box plot medians.
pub(crate) const MEDIAN: RGBColor = RGBColor(214, 40, 40);

/// Right margin reserved for legends drawn beside the plot.
pub(crate) const LEGEND_MARGIN: u32 = 160;

/// Draws into an SVG canvas of `size` pixels and returns the document.
pub(crate) fn render_svg<F>(size: (u32, u32), draw: F) -> io::Result<String>
where
    F: FnOnce(&Area<'_>) -> DrawResult,
{
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        root.fill(&WHITE).map_err(into_io)?;
        draw(&root).map_err(into_io)?;
        root.present().map_err(into_io)?;
    }
    Ok(svg)
}

fn into_io(err: DrawingAreaErrorKind<io::Error>) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err.to_string())
}

/// Fill color for the `idx`-th series.
pub(crate) fn series_color(idx: usize) -> RGBAColor {
    Palette99::pick(idx).mix(0.8)
}

pub(crate) fn title_style() -> TextStyle<'static> {
    TextStyle::from((FONT, 18).into_font().style(FontStyle::Bold))
}

pub(crate) fn caption_font() -> FontDesc<'static> {
    (FONT, 14).into_font().style(FontStyle::Bold)
}

pub(crate) fn axis_font() -> FontDesc<'static> {
    (FONT, 11).into_font()
}

/// Formats a tick label without trailing noise.
pub(crate) fn tick_label(value: f64) -> String {
    if value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.2}", value)
    }
}

/// Axis range covering `values` and zero, padded so labels fit above the
/// highest bar.
pub(crate) fn value_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let span = if hi > lo { hi - lo } else { 1.0 };
    let lo = if lo < 0.0 { lo - span * 0.1 } else { 0.0 };
    lo..hi + span * 0.15
}

/// Writes "No data" in the middle of `area`.
pub(crate) fn no_data(area: &Area<'_>) -> DrawResult {
    let (width, height) = area.dim_in_pixel();
    let style = TextStyle::from(axis_font()).pos(Pos::new(HPos::Center, VPos::Center));
    area.draw_text("No data", &style, (width as i32 / 2, height as i32 / 2))
}

/// Cartesian chart with one unit-wide slot per category on the x axis.
///
/// Slot `i` spans `i..i + 1`; category labels sit under the slot centers
/// and a zero baseline is drawn across the plot.
pub(crate) fn category_chart<'a, 'b>(
    area: &'a Area<'b>,
    caption: Option<&str>,
    y_desc: &str,
    categories: &[String],
    y_range: Range<f64>,
    right_margin: u32,
) -> Result<ValueChart<'a, 'b>, DrawingAreaErrorKind<io::Error>> {
    let slots = categories.len().max(1) as f64;

    let mut builder = ChartBuilder::on(area);
    builder
        .margin(10)
        .margin_right(right_margin.max(10))
        .x_label_area_size(30)
        .y_label_area_size(60);
    if let Some(caption) = caption {
        builder.caption(caption, caption_font());
    }
    let mut chart = builder.build_cartesian_2d(0.0..slots, y_range)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_x_axis()
        .y_desc(y_desc)
        .y_label_formatter(&|v| tick_label(*v))
        .label_style(axis_font())
        .axis_desc_style(axis_font())
        .draw()?;

    chart.draw_series(std::iter::once(PathElement::new(
        vec![(0.0, 0.0), (slots, 0.0)],
        &BLACK,
    )))?;

    let bottom = chart.y_range().start;
    let label_style = TextStyle::from(axis_font()).pos(Pos::new(HPos::Center, VPos::Top));
    chart.draw_series(categories.iter().enumerate().map(|(i, label)| {
        Text::new(label.clone(), (i as f64 + 0.5, bottom), label_style.clone())
    }))?;

    Ok(chart)
}

/// Value label placed on the end of a bar.
pub(crate) fn value_text(x: f64, value: f64, label: String) -> Text<'static, (f64, f64), String> {
    let anchor = if value >= 0.0 { VPos::Bottom } else { VPos::Top };
    let style = TextStyle::from((FONT, 9).into_font()).pos(Pos::new(HPos::Center, anchor));
    Text::new(label, (x, value), style)
}

/// Draws the series legend to the right of the plotting area.
pub(crate) fn draw_legend<'a, 'b: 'a>(chart: &mut ValueChart<'a, 'b>) -> DrawResult {
    let (plot_width, _) = chart.plotting_area().dim_in_pixel();
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::Coordinate(plot_width as i32 + 15, 0))
        .label_font(axis_font())
        .background_style(&WHITE.mix(0.9))
        .border_style(&BLACK)
        .draw()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_range_includes_zero() {
        let range = value_range([2.0, 8.0].into_iter());
        assert_eq!(range.start, 0.0);
        assert!(range.end > 8.0);
    }

    #[test]
    fn test_value_range_negative() {
        let range = value_range([-4.0, 6.0].into_iter());
        assert!(range.start < -4.0);
        assert!(range.end > 6.0);
    }

    #[test]
    fn test_degenerate_value_range() {
        let range = value_range(std::iter::empty());
        assert_eq!(range, 0.0..0.15);
    }

    #[test]
    fn test_tick_label() {
        assert_eq!(tick_label(20.0), "20");
        assert_eq!(tick_label(2.5), "2.50");
    }

    #[test]
    fn test_render_svg_document() {
        let svg = render_svg((200, 100), no_data).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(">No data</text>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
