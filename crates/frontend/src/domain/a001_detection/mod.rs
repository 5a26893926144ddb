pub mod api;
pub mod ui;

use crate::shared::select::Selectable;
use contracts::domain::a001_detection::aggregate::Detection;

impl Selectable for Detection {
    fn selection_key(&self) -> String {
        self.id.clone()
    }
}
