use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use knight_path::{
    display::{MovesReport, PathReport},
    movegen::knight_moves,
    shortest_knight_path, ChessError, Square,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::warn;

pub fn router() -> Router {
    Router::new()
        .route("/path/:from/:to", get(path))
        .route("/moves/:sq", get(moves))
        .layer(TraceLayer::new_for_http())
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub struct ApiError(ChessError);

impl From<ChessError> for ApiError {
    fn from(err: ChessError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            ChessError::Parse(_) | ChessError::OutOfBounds(_) => StatusCode::BAD_REQUEST,
            ChessError::ExhaustedSearch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!(%status, error = %self.0, "request failed");
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

async fn path(Path((from, to)): Path<(String, String)>) -> Result<Json<PathReport>, ApiError> {
    let from = Square::from_str(&from)?;
    let to = Square::from_str(&to)?;
    let path = shortest_knight_path(from, to)?;
    Ok(Json(PathReport::new(from, to, &path)))
}

async fn moves(Path(sq): Path<String>) -> Result<Json<MovesReport>, ApiError> {
    let sq = Square::from_str(&sq)?;
    if !sq.on_board() {
        return Err(ChessError::OutOfBounds(sq).into());
    }
    Ok(Json(MovesReport::new(sq, knight_moves(&sq))))
}
