use chrono::{Local, TimeZone};
use colored::Colorize;
use timeago::Formatter;
use todolist::api::{CmdMessage, MessageLevel};
use todolist::model::TodoItem;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 20;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_full_todos(todos: &[TodoItem]) {
    for (i, todo) in todos.iter().enumerate() {
        if i > 0 {
            println!("\n--------------------------------\n");
        }
        println!("{} {}", format!("#{}", todo.id).yellow(), todo.created_at.dimmed());
        println!("{}", todo.content);
    }
}

pub(super) fn print_todos(todos: &[TodoItem], date_format: &str) {
    if todos.is_empty() {
        println!("No todos found.");
        return;
    }

    let id_width = todos
        .iter()
        .map(|t| t.id.to_string().len())
        .max()
        .unwrap_or(1);

    for todo in todos {
        let idx_str = format!("{:>width$}. ", todo.id, width = id_width);
        let when = format_when(todo, date_format);

        let fixed_width = 2 + idx_str.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let single_line: String = todo
            .content
            .chars()
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let content = truncate_to_width(&single_line, available);
        let padding = available.saturating_sub(content.width());

        println!(
            "  {}{}{}{}",
            idx_str.yellow(),
            content,
            " ".repeat(padding),
            format!("{:>width$}", when, width = TIME_WIDTH).dimmed()
        );
    }
}

/// Relative time when `created_at` parses with the configured format, raw text otherwise.
fn format_when(todo: &TodoItem, date_format: &str) -> String {
    let Some(naive) = todo.created_at_parsed(date_format) else {
        return todo.created_at.clone();
    };
    let Some(created) = Local.from_local_datetime(&naive).single() else {
        return todo.created_at.clone();
    };

    let duration = Local::now().signed_duration_since(created);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_to_width("Cook", 10), "Cook");
    }

    #[test]
    fn truncate_adds_ellipsis_within_width() {
        let out = truncate_to_width("abcdefghij", 5);
        assert_eq!(out, "abcd…");
        assert!(out.width() <= 5);
    }

    #[test]
    fn truncate_counts_wide_chars() {
        let out = truncate_to_width("명상명상명상", 5);
        assert!(out.width() <= 5);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn unparseable_created_at_is_shown_raw() {
        let todo = TodoItem::new(1, "A".into(), "someday".into());
        assert_eq!(format_when(&todo, "%Y-%m-%d %H:%M:%S"), "someday");
    }
}
