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

//! Box plots drawn from precomputed summaries.

use super::canvas::{
    category_chart, no_data, render_svg, series_color, title_style, value_range, Area, DrawResult,
    MEDIAN,
};
use benchlens_core::Summary;
use plotters::prelude::*;
use std::io;

/// One labelled box.
#[derive(Debug, Clone)]
pub struct BoxEntry {
    pub label: String,
    pub summary: Summary,
}

/// The boxes of one client, side by side.
#[derive(Debug, Clone)]
pub struct BoxPanel {
    pub title: String,
    pub boxes: Vec<BoxEntry>,
}

const PANEL_HEIGHT: u32 = 420;

/// Draws one panel per entry of `panels`, left to right, each with its own
/// value axis. Whiskers span min to max; the box spans Q1 to Q3 with a
/// median line.
pub fn box_panels(title: &str, y_label: &str, panels: &[BoxPanel]) -> io::Result<String> {
    let panel_width = panels
        .iter()
        .map(|p| (p.boxes.len() as u32 * 60 + 100).max(260))
        .max()
        .unwrap_or(300);
    let size = ((panels.len().max(1) as u32 * panel_width).max(300), PANEL_HEIGHT + 50);

    render_svg(size, |root| {
        let body = root.titled(title, title_style())?;
        if panels.is_empty() {
            return no_data(&body);
        }
        for (area, panel) in body.split_evenly((1, panels.len())).iter().zip(panels) {
            draw_panel(area, panel, y_label)?;
        }
        Ok(())
    })
}

fn draw_panel(area: &Area<'_>, panel: &BoxPanel, y_label: &str) -> DrawResult {
    let labels: Vec<String> = panel.boxes.iter().map(|b| b.label.clone()).collect();
    let range = value_range(
        panel
            .boxes
            .iter()
            .flat_map(|b| [b.summary.min, b.summary.max]),
    );
    let mut chart = category_chart(area, Some(panel.title.as_str()), y_label, &labels, range, 10)?;
    let whisker = BLACK.stroke_width(1);

    for (i, entry) in panel.boxes.iter().enumerate() {
        let s = &entry.summary;
        let center = i as f64 + 0.5;

        chart.draw_series(
            [
                vec![(center, s.min), (center, s.max)],
                vec![(center - 0.12, s.min), (center + 0.12, s.min)],
                vec![(center - 0.12, s.max), (center + 0.12, s.max)],
            ]
            .into_iter()
            .map(|points| PathElement::new(points, whisker)),
        )?;
        chart.draw_series([
            Rectangle::new([(center - 0.25, s.q1), (center + 0.25, s.q3)], series_color(1).filled()),
            Rectangle::new([(center - 0.25, s.q1), (center + 0.25, s.q3)], whisker),
        ])?;
        chart.draw_series(std::iter::once(PathElement::new(
            vec![(center - 0.25, s.median), (center + 0.25, s.median)],
            MEDIAN.stroke_width(2),
        )))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchlens_core::summarize;

    #[test]
    fn test_one_box_per_entry() {
        let panels = vec![BoxPanel {
            title: "JSON Client".to_string(),
            boxes: vec![
                BoxEntry {
                    label: "ECHO".to_string(),
                    summary: summarize(&[1.0, 2.0, 3.0]).unwrap(),
                },
                BoxEntry {
                    label: "SUM".to_string(),
                    summary: summarize(&[0.5]).unwrap(),
                },
            ],
        }];
        let svg = box_panels("Distribution", "Time (ms)", &panels).unwrap();

        assert!(svg.contains(">JSON Client</text>"));
        assert!(svg.contains(">ECHO</text>"));
        assert_eq!(svg.matches("#D62828").count(), 2);
    }

    #[test]
    fn test_panel_per_client() {
        let panel = |title: &str| BoxPanel {
            title: title.to_string(),
            boxes: vec![BoxEntry {
                label: "ECHO".to_string(),
                summary: summarize(&[1.0]).unwrap(),
            }],
        };
        let svg = box_panels("Distribution", "Time (ms)", &[panel("JSON Client"), panel("PROTO Client")]).unwrap();

        assert!(svg.contains(">PROTO Client</text>"));
        assert_eq!(svg.matches(">ECHO</text>").count(), 2);
    }

    #[test]
    fn test_empty() {
        assert!(box_panels("Distribution", "Time (ms)", &[]).unwrap().contains("No data"));
    }
}
