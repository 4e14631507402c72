//! Main application for the Othello GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::game_state::{GameMode, GameResult, GameState};
use super::theme::*;
use crate::eval::evaluate_terms;
use crate::{EngineMode, MoveKind, Side};

/// Main Othello application
pub struct OthelloApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for OthelloApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameMode::default()),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }
}

impl OthelloApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Start over in `mode`, keeping the engine and display settings
    fn new_game(&mut self, mode: GameMode) {
        let engine_mode = self.state.engine_mode;
        let show_hints = self.state.show_hints;
        self.state = GameState::new(mode);
        self.state.engine_mode = engine_mode;
        self.state.show_hints = show_hints;
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs AI - Black)").clicked() {
                        self.new_game(GameMode::PvE {
                            human_side: Side::Black,
                        });
                        ui.close_menu();
                    }
                    if ui.button("New Game (vs AI - White)").clicked() {
                        self.new_game(GameMode::PvE {
                            human_side: Side::White,
                        });
                        ui.close_menu();
                    }
                    if ui.button("New Game (Hotseat)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Engine", |ui| {
                    ui.radio_value(&mut self.state.engine_mode, EngineMode::Production, "Production (depth 7)");
                    ui.radio_value(&mut self.state.engine_mode, EngineMode::Validation, "Validation (depth 2)");
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                    ui.checkbox(&mut self.state.show_hints, "Legal Moves");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human_side } => format!("vs AI - You: {}", human_side.name()),
                        GameMode::PvP => "Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &result);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn button_frame() -> Frame {
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
    }

    /// Label styled as a button; returns true when clicked
    fn text_button(ui: &mut egui::Ui, text: &str) -> bool {
        let mut clicked = false;
        Self::button_frame().show(ui, |ui| {
            clicked = ui
                .add(egui::Label::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click()))
                .clicked();
        });
        clicked
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(egui::Color32::from_rgb(180, 180, 185)));
            ui.add_space(4.0);
            ui.label(RichText::new("OTHELLO").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let (disk, accent, ink) = match self.state.to_move {
                Side::Black => ("●", egui::Color32::from_rgb(70, 70, 75), TEXT_PRIMARY),
                Side::White => ("○", egui::Color32::from_rgb(220, 220, 225), egui::Color32::from_rgb(30, 30, 35)),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    disk,
                    egui::FontId::proportional(28.0),
                    ink,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(self.state.to_move.name().to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if self.state.is_ai_thinking() {
                        let secs = self
                            .state
                            .ai_thinking_elapsed()
                            .map_or(0.0, |d| d.as_secs_f32());
                        (format!("AI thinking... {:.1}s", secs), STATUS_WARNING)
                    } else if self.state.game_over.is_some() {
                        ("Game Over".to_string(), WIN_HIGHLIGHT)
                    } else if self.state.is_human_turn() {
                        ("Your turn".to_string(), STATUS_OK)
                    } else {
                        ("Waiting for AI".to_string(), TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Turn time {:.1}s", self.state.move_timer.elapsed().as_secs_f32()))
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("DISKS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let board = &self.state.board;
            for (side, symbol) in [(Side::Black, "●"), (Side::White, "○")] {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(symbol).size(18.0).color(TEXT_PRIMARY));
                    ui.label(RichText::new(side.name()).size(12.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(board.count(side).to_string())
                                .size(18.0)
                                .strong()
                                .color(TEXT_PRIMARY),
                        );
                    });
                });
            }

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!(
                    "{} empty, {} legal moves",
                    board.empty_count(),
                    board.num_legal_moves(self.state.to_move)
                ))
                .size(10.0)
                .color(TEXT_MUTED),
            );
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if Self::text_button(ui, "↩ Undo") {
                    self.state.undo();
                }
                ui.add_space(4.0);
                if Self::text_button(ui, "New Game") {
                    self.new_game(self.state.mode);
                }
                ui.add_space(4.0);
                if Self::text_button(ui, "Hint") {
                    self.state.request_suggestion();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(result) = &self.state.last_ai_result {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        let kind = match result.kind {
                            MoveKind::Pass => "Pass",
                            MoveKind::Forced => "Forced",
                            MoveKind::AlphaBeta => "Alpha-Beta",
                        };
                        ui.label(RichText::new(kind).size(11.0).strong().color(STATUS_OK));
                        ui.label(RichText::new(format!("Score: {:.1}", result.score)).size(10.0).color(TEXT_SECONDARY));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                            ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                        });
                    });
                });

                ui.add_space(4.0);
                ui.label(RichText::new(format!("→ {}", result.chosen)).size(12.0).strong().color(WIN_HIGHLIGHT));
            } else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
            }

            // Raw evaluator terms for the engine's side (or the side to move)
            let side = self.state.ai_side().unwrap_or(self.state.to_move);
            let terms = evaluate_terms(&self.state.board, side);
            ui.add_space(6.0);
            ui.label(RichText::new(format!("Terms for {}", side.name())).size(10.0).color(TEXT_MUTED));
            egui::Grid::new("eval_terms").num_columns(2).show(ui, |ui| {
                for (name, value) in [
                    ("parity", terms.parity),
                    ("corners", terms.corners),
                    ("closeness", terms.closeness),
                    ("mobility", terms.mobility),
                    ("frontier", terms.frontier),
                    ("squares", terms.squares),
                    ("total", terms.total()),
                ] {
                    ui.label(RichText::new(name).size(10.0).color(TEXT_SECONDARY));
                    ui.label(RichText::new(format!("{:.1}", value)).size(10.0).color(TEXT_PRIMARY));
                    ui.end_row();
                }
            });
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: &GameResult) {
        let headline = match result.winner {
            Some(side) => format!("{} WINS!", side.name().to_uppercase()),
            None => "DRAW".to_string(),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("{} - {}", result.black, result.white))
                            .size(14.0)
                            .color(WIN_HIGHLIGHT),
                    );
                    ui.add_space(12.0);

                    if Self::text_button(ui, "New Game") {
                        self.new_game(self.state.mode);
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let interactive = self.state.game_over.is_none()
                && self.state.is_human_turn()
                && !self.state.is_ai_thinking();

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.to_move,
                self.state.last_move,
                self.state.suggested_move,
                self.state.show_hints,
                interactive,
            );

            if let Some(pos) = clicked {
                if let Err(err) = self.state.try_place(pos) {
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // H - Hint
            if i.key_pressed(egui::Key::H) {
                self.state.request_suggestion();
            }

            // U - Undo
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for OthelloApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over.is_none() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
