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

//! Bar charts: per-operation panels and grouped bars.

use super::canvas::{
    category_chart, draw_legend, no_data, render_svg, series_color, title_style, value_range,
    value_text, Area, DrawResult, LEGEND_MARGIN,
};
use plotters::prelude::*;
use std::io;

/// One bar of a panel.
#[derive(Debug, Clone)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Palette index, stable per client across panels.
    pub color: usize,
}

/// One small chart in a grid of panels.
#[derive(Debug, Clone)]
pub struct Panel {
    pub title: String,
    pub bars: Vec<Bar>,
}

/// A named row of values aligned with the chart's categories.
#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,
    /// `None` entries are not drawn.
    pub values: Vec<Option<f64>>,
}

/// Grouped bar chart: one group per category, one bar per series.
#[derive(Debug, Clone)]
pub struct GroupedBars {
    pub title: String,
    pub y_label: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    /// Fixed value range; derived from the data when `None`.
    pub y_range: Option<(f64, f64)>,
    pub value_label: fn(f64) -> String,
}

const PANEL_SIZE: (u32, u32) = (320, 280);
const PANEL_COLUMNS: usize = 3;
const TITLE_HEIGHT: u32 = 50;

/// Draws a grid of independent bar panels, three per row.
pub fn panel_bars(
    title: &str,
    y_label: &str,
    panels: &[Panel],
    value_label: fn(f64) -> String,
) -> io::Result<String> {
    let columns = panels.len().clamp(1, PANEL_COLUMNS);
    let rows = ((panels.len() + PANEL_COLUMNS - 1) / PANEL_COLUMNS).max(1);
    let size = (
        columns as u32 * PANEL_SIZE.0,
        rows as u32 * PANEL_SIZE.1 + TITLE_HEIGHT,
    );

    render_svg(size, |root| {
        let body = root.titled(title, title_style())?;
        if panels.is_empty() {
            return no_data(&body);
        }
        for (area, panel) in body.split_evenly((rows, columns)).iter().zip(panels) {
            draw_panel(area, panel, y_label, value_label)?;
        }
        Ok(())
    })
}

fn draw_panel(area: &Area<'_>, panel: &Panel, y_label: &str, value_label: fn(f64) -> String) -> DrawResult {
    let labels: Vec<String> = panel.bars.iter().map(|b| b.label.clone()).collect();
    let range = value_range(panel.bars.iter().map(|b| b.value));
    let mut chart = category_chart(area, Some(panel.title.as_str()), y_label, &labels, range, 10)?;

    chart.draw_series(panel.bars.iter().enumerate().map(|(i, bar)| {
        let left = i as f64 + 0.2;
        Rectangle::new([(left, 0.0), (left + 0.6, bar.value)], series_color(bar.color).filled())
    }))?;
    chart.draw_series(
        panel
            .bars
            .iter()
            .enumerate()
            .map(|(i, bar)| value_text(i as f64 + 0.5, bar.value, value_label(bar.value))),
    )?;
    Ok(())
}

/// Draws a grouped bar chart with a legend of series names.
pub fn grouped_bars(chart: &GroupedBars) -> io::Result<String> {
    let groups = chart.categories.len().max(1) as u32;
    let per_group = chart.series.len().max(1) as u32 * 34 + 40;
    let size = ((groups * per_group).max(480) + LEGEND_MARGIN + 80, 480);

    render_svg(size, |root| {
        let body = root.titled(&chart.title, title_style())?;
        if chart.categories.is_empty() || chart.series.is_empty() {
            return no_data(&body);
        }

        let range = match chart.y_range {
            Some((lo, hi)) => lo..hi,
            None => value_range(chart.series.iter().flat_map(|s| s.values.iter().flatten().copied())),
        };
        let mut plot = category_chart(&body, None, &chart.y_label, &chart.categories, range, LEGEND_MARGIN)?;

        let slot = 0.8 / chart.series.len() as f64;
        for (j, series) in chart.series.iter().enumerate() {
            let color = series_color(j);
            let bars: Vec<(f64, f64)> = series
                .values
                .iter()
                .enumerate()
                .filter_map(|(i, value)| value.map(|v| (i as f64 + 0.1 + j as f64 * slot, v)))
                .collect();

            plot.draw_series(
                bars.iter()
                    .map(|&(left, value)| Rectangle::new([(left, 0.0), (left + slot, value)], color.filled())),
            )?
            .label(series.name.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));

            plot.draw_series(
                bars.iter()
                    .map(|&(left, value)| value_text(left + slot / 2.0, value, (chart.value_label)(value))),
            )?;
        }

        draw_legend(&mut plot)
    })
}
