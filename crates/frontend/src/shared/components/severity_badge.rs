use contracts::domain::common::Severity;
use leptos::prelude::*;
use thaw::*;

pub fn severity_color(severity: Severity) -> BadgeColor {
    match severity {
        Severity::Info => BadgeColor::Informative,
        Severity::Low => BadgeColor::Subtle,
        Severity::Medium => BadgeColor::Warning,
        Severity::High => BadgeColor::Important,
        Severity::Critical => BadgeColor::Danger,
    }
}

#[component]
pub fn SeverityBadge(severity: Severity) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=severity_color(severity)>
            {severity.label()}
        </Badge>
    }
}
