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

//! Scatter plot of per-record pairs.

use super::canvas::{
    axis_font, draw_legend, no_data, render_svg, series_color, tick_label, title_style, value_range,
    LEGEND_MARGIN,
};
use plotters::prelude::*;
use std::io;

/// Points of one series.
#[derive(Debug, Clone)]
pub struct PointSeries {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

/// Draws every series in its palette color with a legend on the right.
pub fn scatter(title: &str, x_label: &str, y_label: &str, series: &[PointSeries]) -> io::Result<String> {
    render_svg((640 + LEGEND_MARGIN, 520), |root| {
        let body = root.titled(title, title_style())?;
        if series.iter().all(|s| s.points.is_empty()) {
            return no_data(&body);
        }

        let all = || series.iter().flat_map(|s| s.points.iter().copied());
        let mut chart = ChartBuilder::on(&body)
            .margin(10)
            .margin_right(LEGEND_MARGIN)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(
                value_range(all().map(|(x, _)| x)),
                value_range(all().map(|(_, y)| y)),
            )?;

        chart
            .configure_mesh()
            .x_desc(x_label)
            .y_desc(y_label)
            .x_label_formatter(&|v| tick_label(*v))
            .y_label_formatter(&|v| tick_label(*v))
            .label_style(axis_font())
            .axis_desc_style(axis_font())
            .draw()?;

        for (j, s) in series.iter().enumerate() {
            let color = series_color(j);
            chart
                .draw_series(s.points.iter().map(|&(x, y)| Circle::new((x, y), 4, color.filled())))?
                .label(s.name.as_str())
                .legend(move |(x, y)| Circle::new((x + 5, y), 4, color.filled()));
        }

        draw_legend(&mut chart)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_circle_per_point_plus_legend() {
        let series = vec![
            PointSeries {
                name: "JSON".to_string(),
                points: vec![(1.0, 4.0), (2.0, -1.0)],
            },
            PointSeries {
                name: "PROTO".to_string(),
                points: vec![(0.5, 1.0)],
            },
        ];
        let svg = scatter("Time vs Memory", "Time (ms)", "Memory (KiB)", &series).unwrap();
        assert_eq!(svg.matches("<circle").count(), 5);
        assert!(svg.contains(">PROTO</text>"));
        assert!(svg.contains(">Time vs Memory</text>"));
    }

    #[test]
    fn test_empty() {
        assert!(scatter("t", "x", "y", &[]).unwrap().contains("No data"));
    }
}
