use std::sync::Arc;

use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    response::{Html, Redirect},
};
use serde::Deserialize;

use crate::{
    collections::{clear_list, clear_sorted_set, seed_list, seed_sorted_set},
    config::Target,
    database::open,
    error::{AppError, JsonError},
    query::{Direction, read_list, read_sorted_set},
    state::AppState,
    views,
};

pub const DEFAULT_STARTING_POS: i64 = 1;

const SORTED_SET: &str = "sorted set";
const LIST: &str = "list";

#[derive(Deserialize)]
pub struct SeedForm {
    starting_pos: Option<String>,
}

/// Absent, blank or non-integer input falls back to [`DEFAULT_STARTING_POS`].
pub fn parse_starting_pos(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_STARTING_POS)
}

fn starting_pos(form: Result<Form<SeedForm>, FormRejection>) -> i64 {
    let raw = form.ok().and_then(|Form(form)| form.starting_pos);

    parse_starting_pos(raw.as_deref())
}

pub async fn home_handler() -> Html<String> {
    views::index()
}

pub async fn add_sorted_set_form() -> Html<String> {
    views::seed_form("/add_sorted_set", SORTED_SET)
}

pub async fn add_sorted_set_handler(
    State(state): State<Arc<AppState>>,
    form: Result<Form<SeedForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let mut conn = open(state.config.profile(Target::Write)).await?;
    seed_sorted_set(&mut conn, starting_pos(form)).await?;

    Ok(Redirect::to("/"))
}

pub async fn delete_sorted_set_form() -> Html<String> {
    views::delete_form("/delete_sorted_set", SORTED_SET)
}

pub async fn delete_sorted_set_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Redirect, JsonError> {
    let mut conn = open(state.config.profile(Target::Write)).await?;
    clear_sorted_set(&mut conn).await?;

    Ok(Redirect::to("/"))
}

pub async fn view_asc_sorted_set_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, JsonError> {
    view_sorted_set(&state, Direction::Ascending).await
}

pub async fn view_desc_sorted_set_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, JsonError> {
    view_sorted_set(&state, Direction::Descending).await
}

async fn view_sorted_set(state: &AppState, direction: Direction) -> Result<Html<String>, JsonError> {
    let mut conn = open(state.config.profile(Target::Read)).await?;
    let integers = read_sorted_set(&mut conn, direction).await?;

    Ok(views::integers(SORTED_SET, &integers, direction))
}

pub async fn add_list_form() -> Html<String> {
    views::seed_form("/add_list", LIST)
}

pub async fn add_list_handler(
    State(state): State<Arc<AppState>>,
    form: Result<Form<SeedForm>, FormRejection>,
) -> Result<Redirect, AppError> {
    let mut conn = open(state.config.profile(Target::Write)).await?;
    seed_list(&mut conn, starting_pos(form)).await?;

    Ok(Redirect::to("/"))
}

pub async fn delete_list_form() -> Html<String> {
    views::delete_form("/delete_list", LIST)
}

pub async fn delete_list_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Redirect, AppError> {
    let mut conn = open(state.config.profile(Target::Write)).await?;
    clear_list(&mut conn).await?;

    Ok(Redirect::to("/"))
}

pub async fn view_asc_list_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    view_list(&state, Direction::Ascending).await
}

pub async fn view_desc_list_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    view_list(&state, Direction::Descending).await
}

async fn view_list(state: &AppState, direction: Direction) -> Result<Html<String>, AppError> {
    let mut conn = open(state.config.profile(Target::Read)).await?;
    let integers = read_list(&mut conn, direction).await?;

    Ok(views::integers(LIST, &integers, direction))
}
