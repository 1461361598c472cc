//! Data transfer objects for API requests and responses
//!
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    BookSearchQuery, CreateBookRequest, CreateChapterRequest, CreateCommentRequest,
    SetReactionRequest,
};

pub use responses::{
    BookDataChapter, BookDataResponse, BookResponse, BookSummaryResponse, ChapterLinkResponse,
    ChapterResponse, ChapterViewResponse, CommentResponse, CommentTallyResponse, HealthChecks,
    HealthResponse, ProfileResponse, ReactionStateResponse, ReactionSummaryResponse,
    ReactorResponse, ReadinessResponse, UserResponse,
};
