//! Command dispatch: one parsed command against one loaded session.

use scoring_engine::config::{ScoringConfig, SettingsOverrides};
use scoring_engine::domain::{
    common_fans, fan_catalog, limit_fans, validate_fan_combination, FanType, GameState, PlayerId,
    PLAYERS,
};
use scoring_engine::{FanClaim, PreviewRequest, ScoreResult, Session, WinType};
use serde::Serialize;
use tracing::info;

use crate::cli::{Command, FansArgs, StartArgs, WinArgs};
use crate::config::ConfigError;
use crate::error::AppError;
use crate::render;

/// What a command produced: text (or JSON) for stdout, and whether the
/// session needs saving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub changed: bool,
}

impl Outcome {
    fn saved(output: String) -> Self {
        Self {
            output,
            changed: true,
        }
    }

    fn read_only(output: String) -> Self {
        Self {
            output,
            changed: false,
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn game(session: &Session) -> Result<&GameState, AppError> {
    session.game.as_ref().ok_or(AppError::NoGame)
}

/// Render the table (or its JSON) after a state change.
fn table_view(session: &Session, json: bool) -> Result<String, AppError> {
    let game = game(session)?;
    if json {
        to_json(game)
    } else {
        Ok(render::table(game))
    }
}

/// Seat index, exact player id, or exact name (in that order).
fn resolve_player(game: &GameState, token: &str) -> Result<PlayerId, AppError> {
    let token = token.trim();
    if let Ok(seat) = token.parse::<u8>() {
        if let Some(p) = game.player_by_seat(seat) {
            return Ok(p.id.clone());
        }
    }
    game.players
        .iter()
        .find(|p| p.id.as_str() == token)
        .or_else(|| game.players.iter().find(|p| p.name == token))
        .map(|p| p.id.clone())
        .ok_or_else(|| AppError::UnknownPlayer(token.to_string()))
}

fn start_overrides(args: &StartArgs, current: &ScoringConfig) -> Result<SettingsOverrides, AppError> {
    let player_names = match &args.names {
        None => None,
        Some(names) => {
            let names: Vec<String> = names.iter().map(|n| n.trim().to_string()).collect();
            let names: [String; PLAYERS] = names.try_into().map_err(|v: Vec<String>| {
                AppError::Config(ConfigError::InvalidNames { count: v.len() })
            })?;
            if names.iter().any(String::is_empty) {
                return Err(AppError::Config(ConfigError::InvalidNames {
                    count: PLAYERS,
                }));
            }
            Some(names)
        }
    };

    let touches_scoring = args.base_score.is_some()
        || args.min_fan.is_some()
        || args.max_fan.is_some()
        || args.starting_score.is_some()
        || args.variant.is_some()
        || args.payment_mode.is_some();
    let scoring_config = touches_scoring.then(|| ScoringConfig {
        base_score: args.base_score.unwrap_or(current.base_score),
        min_fan: args.min_fan.unwrap_or(current.min_fan),
        max_fan: args.max_fan.unwrap_or(current.max_fan),
        starting_score: args.starting_score.unwrap_or(current.starting_score),
        variant: args.variant.map_or(current.variant, Into::into),
        payment_mode: args.payment_mode.map_or(current.payment_mode, Into::into),
    });

    Ok(SettingsOverrides {
        rule_set_id: None,
        scoring_config,
        player_names,
        starting_score: args.starting_score,
    })
}

fn preview_request(game: &GameState, args: &WinArgs) -> Result<PreviewRequest, AppError> {
    let winner_id = resolve_player(game, &args.winner)?;
    let (win_type, loser_id) = match &args.discarder {
        Some(d) if !args.self_draw => (WinType::Discard, Some(resolve_player(game, d)?)),
        _ => (WinType::SelfDraw, None),
    };
    if loser_id.as_ref() == Some(&winner_id) {
        return Err(AppError::SelfDiscard);
    }
    let fans = match (&args.fans, args.fan) {
        (Some(ids), _) => FanClaim::Pattern {
            fan_ids: ids.iter().map(|s| s.trim().to_string()).collect(),
        },
        (None, Some(fan_count)) => FanClaim::Direct {
            fan_count,
            description: args.desc.clone(),
        },
        // The argument groups make this unreachable from the command line.
        (None, None) => FanClaim::Direct {
            fan_count: 0,
            description: None,
        },
    };
    Ok(PreviewRequest {
        win_type,
        winner_id,
        loser_id,
        fans,
    })
}

fn preview(session: &Session, args: &WinArgs) -> Result<ScoreResult, AppError> {
    let game = game(session)?;
    let request = preview_request(game, args)?;
    session.preview_score(&request).ok_or(AppError::NoGame)
}

fn list_fans(args: &FansArgs, json: bool) -> Result<String, AppError> {
    let fans: Vec<&FanType> = if args.limit {
        limit_fans().to_vec()
    } else if args.common {
        common_fans().to_vec()
    } else if json {
        fan_catalog(args.variant.map(Into::into))
    } else {
        return Ok(render::fan_catalog(
            args.variant.map(Into::into).unwrap_or_default(),
        ));
    };
    if json {
        to_json(&fans)
    } else {
        Ok(render::fan_list(&fans))
    }
}

/// Apply `command` to `session`.
pub fn run(command: &Command, session: &mut Session, json: bool) -> Result<Outcome, AppError> {
    match command {
        Command::Start(args) => {
            let overrides = start_overrides(args, &session.settings.scoring_config)?;
            let game = session.start_game(overrides)?;
            info!(game_id = %game.id, "new game");
            Ok(Outcome::saved(table_view(session, json)?))
        }
        Command::Win(args) => {
            let result = preview(session, args)?;
            if let Some(err) = &result.error {
                return Err(AppError::Rejected(err.clone()));
            }
            let text = if json {
                to_json(&result)?
            } else {
                render::score_result(&result, game(session)?)
            };
            session.record_win(result)?;
            let table = table_view(session, json)?;
            Ok(Outcome::saved(if json { text } else { text + "\n" + &table }))
        }
        Command::Preview(args) => {
            let result = preview(session, args)?;
            let text = if json {
                to_json(&result)?
            } else {
                render::score_result(&result, game(session)?)
            };
            Ok(Outcome::read_only(text))
        }
        Command::Draw => {
            game(session)?;
            session.record_draw();
            Ok(Outcome::saved(table_view(session, json)?))
        }
        Command::Undo => {
            game(session)?;
            match session.undo_last_round() {
                Some(round) => {
                    let line = if json {
                        to_json(&round)?
                    } else {
                        let game = game(session)?;
                        format!(
                            "已撤銷: {}\n\n{}",
                            render::round_line(game.history.len(), &round, game),
                            render::table(game)
                        )
                    };
                    Ok(Outcome::saved(line))
                }
                None => Ok(Outcome::read_only("冇可以撤銷嘅局\n".to_string())),
            }
        }
        Command::Reset => {
            session.reset_game()?;
            Ok(Outcome::saved(table_view(session, json)?))
        }
        Command::End => match session.end_game() {
            Some(ended) => {
                let text = if json {
                    to_json(&ended)?
                } else {
                    format!("遊戲結束\n{}", render::table(&ended))
                };
                Ok(Outcome::saved(text))
            }
            None => Err(AppError::NoGame),
        },
        Command::NextRound => {
            game(session)?;
            session.next_round();
            Ok(Outcome::saved(table_view(session, json)?))
        }
        Command::AdvanceDealer => {
            game(session)?;
            session.advance_dealer();
            Ok(Outcome::saved(table_view(session, json)?))
        }
        Command::Rename { seat, name } => {
            session.update_player_name(*seat, name)?;
            let text = match &session.game {
                Some(_) => table_view(session, json)?,
                None if json => to_json(&session.settings.player_names)?,
                None => format!("{}\n", session.settings.player_names.join(" / ")),
            };
            Ok(Outcome::saved(text))
        }
        Command::Mode { mode } => {
            session.set_preferred_input_mode((*mode).into());
            Ok(Outcome::saved(if json {
                to_json(&session.preferred_input_mode)?
            } else {
                format!("{:?}\n", session.preferred_input_mode)
            }))
        }
        Command::Fans(args) => Ok(Outcome::read_only(list_fans(args, json)?)),
        Command::Validate { ids } => {
            let v = validate_fan_combination(ids.as_slice());
            Ok(Outcome::read_only(if json {
                to_json(&v)?
            } else {
                render::validation(&v)
            }))
        }
        Command::Show => Ok(Outcome::read_only(table_view(session, json)?)),
        Command::History => {
            let game = game(session)?;
            Ok(Outcome::read_only(if json {
                to_json(&game.history)?
            } else {
                render::history(game)
            }))
        }
    }
}
