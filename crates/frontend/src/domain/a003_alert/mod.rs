pub mod api;
pub mod ui;

use crate::shared::select::Selectable;
use contracts::domain::a003_alert::aggregate::AlertSummary;

impl Selectable for AlertSummary {
    fn selection_key(&self) -> String {
        self.alert_id.clone()
    }
}
