use contracts::domain::a009_analysis_pack::aggregate::{
    AnalysisPack, ListAnalysisPacksInput, ListAnalysisPacksResponse, UpdateAnalysisPackInput,
};

use crate::shared::api_utils::{post_json, ApiError};

pub async fn list_analysis_packs(
    input: &ListAnalysisPacksInput,
) -> Result<ListAnalysisPacksResponse, ApiError> {
    post_json("/api/analysis-packs/list", input).await
}

pub async fn update_analysis_pack(input: &UpdateAnalysisPackInput) -> Result<AnalysisPack, ApiError> {
    post_json("/api/analysis-packs/update", input).await
}
