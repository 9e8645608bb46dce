use crate::error::AppResult;
use engine::manager::StatusSnapshot;
use engine::selector::AccentPlan;
use engine::{AccentResponse, Catalog, ThemeFamily, ToggleReport};

/// Human-readable rendering of an engine response.
///
/// `Error` responses are not rendered; the caller turns them into an error.
pub fn render_response(response: &AccentResponse, json: bool) -> AppResult<String> {
    let text = match response {
        AccentResponse::AccentApplied { change } => {
            let summary = match &change.plan {
                AccentPlan::Enable { index, overlay } if *index == change.requested => {
                    format!("Accent {index} ({overlay}) applied")
                }
                AccentPlan::Enable { index, overlay } => format!(
                    "Accent {} resolved to {index} ({overlay})",
                    change.requested
                ),
                AccentPlan::UnloadAll => "No theme family active; all accents unloaded".to_string(),
            };
            with_report(summary, &change.report)
        }
        AccentResponse::AccentsUnloaded { report } => with_report("Accents unloaded".to_string(), report),
        AccentResponse::FamilyToggled {
            family,
            enabled,
            report,
        } => with_report(
            format!(
                "Theme family {family} turned {}",
                if *enabled { "on" } else { "off" }
            ),
            report,
        ),
        AccentResponse::StockDarkUnloaded { report } => {
            let summary = if report.is_noop() {
                "Stock dark overlay already off"
            } else {
                "Stock dark overlay unloaded"
            };
            with_report(summary.to_string(), report)
        }
        AccentResponse::AccentPairingEnforced { report } => {
            with_report("Monochrome accent pairing checked".to_string(), report)
        }
        AccentResponse::AccentActive { index, active } => {
            format!("Accent {index} is {}", on_off(*active))
        }
        AccentResponse::FamilyActive { family, active } => {
            format!("Theme family {family} is {}", on_off(*active))
        }
        AccentResponse::Status { snapshot } if json => serde_json::to_string_pretty(snapshot)?,
        AccentResponse::Status { snapshot } => render_status(snapshot),
        AccentResponse::Error { error } => error.to_string(),
    };
    Ok(text)
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

fn with_report(summary: String, report: &ToggleReport) -> String {
    let mut text = format!(
        "{summary} ({} of {} toggles applied)",
        report.successful, report.total_requested
    );
    for detail in &report.error_details {
        text.push_str(&format!("\n  failed: {detail}"));
    }
    text
}

pub fn render_status(snapshot: &StatusSnapshot) -> String {
    let families = if snapshot.active_families.any() {
        snapshot
            .active_families
            .as_slice()
            .iter()
            .map(ThemeFamily::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        "none".to_string()
    };

    let accents = if snapshot.enabled_accents.is_empty() {
        "default".to_string()
    } else {
        snapshot
            .enabled_accents
            .iter()
            .map(|accent| format!("{} {}", accent.index, accent.overlay))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut lines = vec![
        format!("User:            {}", snapshot.user),
        format!("Theme families:  {families}"),
        format!("Accents:         {accents}"),
    ];
    if let Some(side) = snapshot.monochrome {
        lines.push(format!("Monochrome:      {side}"));
    }
    lines.push(format!(
        "Stock dark:      {}",
        on_off(snapshot.stock_dark_active)
    ));
    lines.join("\n")
}

pub fn render_catalog(catalog: &Catalog) -> String {
    let mut text = String::from("Accents:\n");
    for (index, overlay) in catalog.accents().iter().enumerate() {
        let note = if index == 0 {
            " (default, never toggled)"
        } else if index == catalog.black_accent() {
            " (monochrome)"
        } else if index == catalog.white_accent() {
            " (monochrome twin, selected through the monochrome index)"
        } else {
            ""
        };
        text.push_str(&format!("  {index:>2}  {overlay}{note}\n"));
    }

    text.push_str("Theme families:\n");
    for family in ThemeFamily::ALL {
        let paired = catalog.paired_accent(family);
        text.push_str(&format!(
            "  {family} ({} overlays, paired accent {paired}, anchor {})\n",
            catalog.family_members(family).len(),
            catalog.family_anchor(family)
        ));
    }
    text.push_str(&format!("Stock dark: {}", catalog.stock_dark()));
    text
}
