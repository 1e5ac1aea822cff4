//! Plain-text tables for sheet rows and external users

use crate::models::{ExternalUserRecord, UserRecord};

/// Widest a single cell may grow before it is truncated
const MAX_CELL: usize = 32;

/// Truncate a string for table display, handling Unicode safely.
///
/// If the string exceeds `max_len` characters, it is cut and "..." appended.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{truncated}...")
    }
}

fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|c| truncate(c, MAX_CELL)).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |values: Vec<&str>| -> String {
        values
            .iter()
            .zip(&widths)
            .map(|(v, w)| format!("{:<width$}", v, width = *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![line(headers.to_vec())];
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    out.extend(
        cells
            .iter()
            .map(|row| line(row.iter().map(String::as_str).collect())),
    );

    out.join("\n")
}

/// Render sheet rows with the sheet's own column headers
pub fn render_user_records(records: &[UserRecord]) -> String {
    if records.is_empty() {
        return "(no rows)".to_string();
    }

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.home_instance_id.to_string(),
                r.login_name.clone(),
                r.first_name.clone(),
                r.last_name.clone(),
                r.display_name.clone(),
                r.user_role.clone(),
                r.vhm_id.clone(),
                r.owner_id.clone(),
                r.instance_name.clone(),
            ]
        })
        .collect();

    render(&UserRecord::HEADERS, &rows)
}

/// Render a target instance's external users
pub fn render_external_users(records: &[ExternalUserRecord]) -> String {
    if records.is_empty() {
        return "(no external users)".to_string();
    }

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.home_instance_id.to_string(),
                r.external_record_id.to_string(),
                r.login_name.clone(),
                r.user_role.clone(),
            ]
        })
        .collect();

    render(&["Home VIQ ID", "ID", "LOGIN NAME", "USER ROLE"], &rows)
}
