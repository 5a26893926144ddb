pub mod api;
pub mod ui;

use crate::shared::select::Selectable;
use contracts::domain::a002_data_model::aggregate::DataModel;

impl Selectable for DataModel {
    fn selection_key(&self) -> String {
        self.id.clone()
    }
}
