use crate::data::user::UserRepository;
use crate::model::user::{CreateUserParams, Provider, Role, UpdateProfileParams};
use entity::user::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::user::UserFactory};

mod create;
mod find;
mod get_all_paginated;
mod manage;
