//! # bookworm-service
//!
//! Application layer: services that enforce the reaction, comment and
//! sequencing rules, resolve media references, and compose the read views.

pub mod dto;
pub mod services;

pub use services::{
    BookService, ChapterNeighbors, ChapterService, CommentService, ContentService, MediaResolver,
    ReactionService, ReactionSummary, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, UserService,
};
