use crate::data::comment::{CommentRepository, REPLY_DEPTH};
use crate::model::comment::{CommentStatus, CreateCommentParams};
use entity::prelude::*;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod get_by_post_id;
mod update_content;
