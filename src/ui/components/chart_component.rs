//! Per-discipline completeness chart.

use crate::discipline::{Discipline, DisciplineCounts};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

const BAR_GAP: u16 = 1;

/// Bar chart of tag counts per discipline, redrawn from the counts given to
/// [`ChartComponent::recompute`].
#[derive(Default)]
pub struct ChartComponent {
    counts: DisciplineCounts,
}

impl ChartComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recompute(&mut self, counts: DisciplineCounts) {
        self.counts = counts;
    }

    pub fn counts(&self) -> &DisciplineCounts {
        &self.counts
    }

    pub fn title(&self) -> String {
        format!(
            "Completeness: {}/{} disciplines",
            self.counts.covered(),
            Discipline::ALL.len()
        )
    }

    fn bar_color(discipline: Discipline) -> Color {
        match discipline {
            Discipline::Mechanical => Color::Cyan,
            Discipline::Electrical => Color::Yellow,
            Discipline::Instrumentation => Color::Magenta,
            Discipline::Process => Color::Green,
        }
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect) {
        let bar_count = Discipline::ALL.len() as u16;
        let inner_width = rect.width.saturating_sub(2);
        let bar_width = (inner_width.saturating_sub(BAR_GAP * (bar_count - 1)) / bar_count).max(1);

        let bars: Vec<Bar> = self
            .counts
            .iter()
            .map(|(discipline, count)| {
                let label = if bar_width as usize >= discipline.as_str().len() {
                    discipline.as_str()
                } else {
                    discipline.abbreviation()
                };
                Bar::default()
                    .value(count)
                    .label(Line::from(label))
                    .style(Style::default().fg(Self::bar_color(discipline)))
            })
            .collect();

        let chart = BarChart::default()
            .block(Block::default().borders(Borders::ALL).title(self.title()))
            .data(BarGroup::default().bars(&bars))
            .bar_width(bar_width)
            .bar_gap(BAR_GAP)
            .value_style(Style::default().fg(Color::Black).bg(Color::White));

        f.render_widget(chart, rect);
    }
}
