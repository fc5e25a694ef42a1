mod match_record;
mod state;

pub use match_record::{CreatedResponse, HealthResponse, Match, MatchPayload, SuccessResponse};
pub use state::AppState;
