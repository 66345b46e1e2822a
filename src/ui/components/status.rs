//! Backend status page body: health line, database line and the
//! check-database hint.

use crate::domain::HealthStatus;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Palette;
use crate::ui::viewmodel::StatusViewModel;

/// Renders the status lines starting at `row` and returns the next free row.
pub fn render_status(out: &mut String, row: usize, vm: &StatusViewModel, palette: &Palette) -> usize {
    let mut current = row;

    position_cursor(out, current, 1);
    out.push_str(&Palette::fg(&palette.colors.text_dim));
    out.push_str(&format!(" API: {}", vm.api_url));
    out.push_str(Palette::reset());
    current += 1;

    position_cursor(out, current, 1);
    out.push_str(&Palette::fg(&palette.colors.text_fg));
    out.push_str(" Health: ");
    match vm.health {
        None => {
            out.push_str(&Palette::fg(&palette.colors.text_dim));
            out.push_str("checking…");
        }
        Some(HealthStatus::Ok) => {
            out.push_str(&Palette::fg(&palette.colors.success_fg));
            out.push_str("ok");
        }
        Some(HealthStatus::Error) => {
            out.push_str(&Palette::fg(&palette.colors.error_fg));
            out.push_str("error");
        }
    }
    out.push_str(Palette::reset());
    current += 1;

    position_cursor(out, current, 1);
    out.push_str(&Palette::fg(&palette.colors.text_fg));
    out.push_str(" Database: ");
    if vm.db_loading {
        out.push_str(&Palette::fg(&palette.colors.text_dim));
        out.push_str("checking…");
    } else {
        match &vm.db {
            None => {
                out.push_str(&Palette::fg(&palette.colors.text_dim));
                out.push_str("not checked");
            }
            Some(db) if db.ok => {
                out.push_str(&Palette::fg(&palette.colors.success_fg));
                out.push_str(&format!("reachable ({})", db.time.as_deref().unwrap_or("unknown time")));
            }
            Some(db) => {
                out.push_str(&Palette::fg(&palette.colors.error_fg));
                out.push_str(&format!("unreachable: {}", db.error.as_deref().unwrap_or("unknown error")));
            }
        }
    }
    out.push_str(Palette::reset());
    current + 1
}
