//! Overlays drawn in a centered box over the current screen.

use chrono::Datelike;
use crate::picker::{CalendarDay, CalendarMonth, DayState, PickerFocus, WEEKDAY_HEADERS};
use crate::ui::helpers::{center, pad, position_cursor, spread};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CalendarView, FiltersView, LocationView, NoticeView, OverlayView};

use super::form::render_form;

const MODAL_WIDTH: usize = 44;
const DAY_CELL: usize = 4;

/// Box geometry in 1-indexed terminal coordinates.
#[derive(Debug, Clone, Copy)]
struct Frame {
    top: usize,
    left: usize,
    width: usize,
    height: usize,
}

impl Frame {
    fn centered(content_rows: usize, rows: usize, cols: usize) -> Self {
        let width = MODAL_WIDTH.min(cols.saturating_sub(2)).max(10);
        let height = (content_rows + 4).min(rows.saturating_sub(2)).max(4);
        Self {
            top: rows.saturating_sub(height) / 2 + 1,
            left: cols.saturating_sub(width) / 2 + 1,
            width,
            height,
        }
    }

    const fn inner_width(&self) -> usize {
        self.width.saturating_sub(4)
    }

    const fn inner_left(&self) -> usize {
        self.left + 2
    }

    /// First content row, below the title.
    const fn body_top(&self) -> usize {
        self.top + 2
    }

    const fn last_row(&self) -> usize {
        self.top + self.height - 1
    }

    /// Clears the area and draws the border with `title` in the top edge.
    fn draw(&self, title: &str, theme: &Theme) {
        let inner = self.width.saturating_sub(2);
        let border = Theme::fg(&theme.colors.accent);

        position_cursor(self.top, self.left);
        let label = format!(" {title} ");
        let rest = inner.saturating_sub(label.chars().count() + 1);
        print!("{border}┌─{}{label}{border}{}┐", Theme::bold(), "─".repeat(rest));
        print!("{}", Theme::reset());

        for row in self.top + 1..self.last_row() {
            position_cursor(row, self.left);
            print!("{border}│{}{border}│{}", " ".repeat(inner), Theme::reset());
        }

        position_cursor(self.last_row(), self.left);
        print!("{border}└{}┘{}", "─".repeat(inner), Theme::reset());
    }

    /// Writes one content line, clipped to the box.
    fn line(&self, row: usize, text: &str, style: &str) {
        if row >= self.last_row() {
            return;
        }
        position_cursor(row, self.inner_left());
        print!("{style}{}{}", pad(text, self.inner_width()), Theme::reset());
    }
}

pub fn render_overlay(overlay: &OverlayView, theme: &Theme, rows: usize, cols: usize) {
    match overlay {
        OverlayView::Calendar(view) => render_calendar(view, theme, rows, cols),
        OverlayView::Filters(view) => render_filters(view, theme, rows, cols),
        OverlayView::Location(view) => render_location(view, theme, rows, cols),
        OverlayView::Notice(view) => render_notice(view, theme, rows, cols),
    }
}

fn render_calendar(view: &CalendarView, theme: &Theme, rows: usize, cols: usize) {
    // month title, weekday header, weeks, blank, dates, two time rows, hint
    let content = 2 + view.month.weeks.len() + 5;
    let frame = Frame::centered(content, rows, cols);
    frame.draw("Select Dates", theme);

    let mut row = frame.body_top();
    let heading = if view.focus == PickerFocus::Calendar {
        Theme::fg(&theme.colors.accent)
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    frame.line(
        row,
        &center(&format!("‹  {}  ›", view.month.title), frame.inner_width()),
        &format!("{}{heading}", Theme::bold()),
    );
    row += 1;

    row = render_month(&frame, row, &view.month, theme);
    row += 1;

    let dates = format!("Pickup {}   Dropoff {}", view.pickup_label, view.dropoff_label);
    frame.line(row, &dates, &Theme::fg(&theme.colors.text_normal));
    row += 1;

    for (label, time, focus) in [
        ("Pickup time", view.pickup_time, PickerFocus::PickupTime),
        ("Dropoff time", view.dropoff_time, PickerFocus::DropoffTime),
    ] {
        let value = if focus == PickerFocus::DropoffTime && view.time_conflict {
            format!("{time} (unavailable)")
        } else {
            time.to_string()
        };
        let text = spread(label, &format!("‹ {value} ›"), frame.inner_width());
        let style = if view.focus == focus {
            format!(
                "{}{}",
                Theme::fg(&theme.colors.selection_fg),
                Theme::bg(&theme.colors.selection_bg)
            )
        } else if focus == PickerFocus::DropoffTime && view.time_conflict {
            Theme::fg(&theme.colors.disabled_fg)
        } else {
            Theme::fg(&theme.colors.text_normal)
        };
        frame.line(row, &text, &style);
        row += 1;
    }

    let hint = if view.can_confirm {
        "a confirm • esc cancel"
    } else {
        "pick pickup and dropoff days"
    };
    frame.line(row, &center(hint, frame.inner_width()), &Theme::fg(&theme.colors.text_dim));
}

fn render_month(frame: &Frame, row: usize, month: &CalendarMonth, theme: &Theme) -> usize {
    let grid_width = DAY_CELL * 7;
    let offset = frame.inner_width().saturating_sub(grid_width) / 2;
    let left = frame.inner_left() + offset;

    position_cursor(row, left);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    for name in WEEKDAY_HEADERS {
        print!("{}", center(name, DAY_CELL));
    }
    print!("{}", Theme::reset());

    let mut current = row + 1;
    for week in &month.weeks {
        if current >= frame.last_row() {
            break;
        }
        position_cursor(current, left);
        for cell in week {
            match cell {
                Some(day) => render_day(day, theme),
                None => print!("{}", " ".repeat(DAY_CELL)),
            }
        }
        print!("{}", Theme::reset());
        current += 1;
    }
    current
}

fn render_day(day: &CalendarDay, theme: &Theme) {
    let colors = &theme.colors;
    let style = match day.state {
        DayState::Disabled => Theme::fg(&colors.disabled_fg),
        DayState::Pickup | DayState::Dropoff => format!(
            "{}{}{}",
            Theme::bold(),
            Theme::fg(&colors.selection_fg),
            Theme::bg(&colors.selection_bg)
        ),
        DayState::InRange => format!("{}{}", Theme::fg(&colors.text_normal), Theme::bg(&colors.range_bg)),
        DayState::Available => Theme::fg(&colors.text_normal),
    };
    let text = if day.is_cursor {
        format!("[{:>2}]", day.date.day())
    } else if day.is_today {
        format!(" {:>2}•", day.date.day())
    } else {
        format!(" {:>2} ", day.date.day())
    };
    print!("{style}{text}{}", Theme::reset());
}

fn render_filters(view: &FiltersView, theme: &Theme, rows: usize, cols: usize) {
    let groups = view.rows.iter().filter(|r| r.group.is_some()).count();
    let frame = Frame::centered(view.rows.len() + groups + 2, rows, cols);
    let title = if view.active_count > 0 {
        format!("Filters ({})", view.active_count)
    } else {
        "Filters".to_string()
    };
    frame.draw(&title, theme);

    let mut row = frame.body_top();
    for filter_row in &view.rows {
        if let Some(group) = filter_row.group {
            frame.line(row, group, &format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.accent)));
            row += 1;
        }
        let style = if filter_row.is_selected {
            format!(
                "{}{}",
                Theme::fg(&theme.colors.selection_fg),
                Theme::bg(&theme.colors.selection_bg)
            )
        } else {
            Theme::fg(&theme.colors.text_normal)
        };
        frame.line(row, &format!("  {}", filter_row.label), &style);
        row += 1;
    }

    frame.line(
        row + 1,
        &center("a apply • r reset • esc cancel", frame.inner_width()),
        &Theme::fg(&theme.colors.text_dim),
    );
}

fn render_location(view: &LocationView, theme: &Theme, rows: usize, cols: usize) {
    let frame = Frame::centered(view.rows.len() * 2 + 1, rows, cols);
    frame.draw("Pickup & Return", theme);

    let row = render_form(frame.body_top(), &view.rows, theme, frame.inner_left(), frame.inner_width());

    let hint = if view.can_confirm {
        "a confirm • esc cancel"
    } else {
        "enter a pickup location"
    };
    frame.line(row, &center(hint, frame.inner_width()), &Theme::fg(&theme.colors.text_dim));
}

fn render_notice(view: &NoticeView, theme: &Theme, rows: usize, cols: usize) {
    let frame = Frame::centered(4, rows, cols);
    frame.draw(&view.title, theme);

    let width = frame.inner_width();
    let mut row = frame.body_top();
    for line in wrap(&view.message, width).iter().take(2) {
        frame.line(row, &center(line, width), &Theme::fg(&theme.colors.success_fg));
        row += 1;
    }
    frame.line(row + 1, &center("enter ok", width), &Theme::fg(&theme.colors.text_dim));
}

/// Greedy word wrap to `width` columns.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = current.chars().count() + usize::from(!current.is_empty()) + word.chars().count();
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
