//! Main application for the Isolation GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{BoardView, Overlay};
use super::game_state::{GameMode, GameResult, GameState, WinType};
use super::theme::*;
use crate::board::MAX_SIDE;
use crate::{Algorithm, Evaluator, Player};

/// Main Isolation application
pub struct IsolationApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
    show_legal_moves: bool,
}

impl Default for IsolationApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameMode::default()),
            board_view: BoardView::default(),
            show_debug: true,
            show_legal_moves: true,
        }
    }
}

impl IsolationApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Start over in `mode`, keeping engine settings and board size
    fn new_game(&mut self, mode: GameMode) {
        if self.state.is_ai_thinking() {
            return;
        }
        self.state.mode = mode;
        self.state.reset();
        log::info!("new game: {mode:?}");
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (PvE - Player 1)").clicked() {
                        self.new_game(GameMode::PvE { human: Player::One });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvE - Player 2)").clicked() {
                        self.new_game(GameMode::PvE { human: Player::Two });
                        ui.close_menu();
                    }
                    if ui.button("New Game (PvP)").clicked() {
                        self.new_game(GameMode::PvP { show_suggestions: false });
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                    ui.checkbox(&mut self.show_legal_moves, "Legal Moves");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human } => format!("PvE - You: {human}"),
                        GameMode::PvP { .. } => "PvP - Hotseat".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info, settings and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(260.0)
            .max_width(300.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(12.0);
                    self.render_title_card(ui);
                    ui.add_space(12.0);

                    self.render_turn_card(ui);
                    ui.add_space(10.0);

                    self.render_timer_card(ui);
                    ui.add_space(10.0);

                    self.render_actions_card(ui);
                    ui.add_space(10.0);

                    self.render_settings_card(ui);

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
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("♞").size(22.0).color(PLAYER_ONE_HIGHLIGHT));
            ui.add_space(4.0);
            ui.label(RichText::new("ISOLATION").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            let (h, w) = (self.state.board.height(), self.state.board.width());
            ui.label(RichText::new(format!("{h}x{w} knight isolation")).size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let player = self.state.current_turn();
            let (fill, _) = token_colors(player);

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, fill);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    if player == Player::One { "1" } else { "2" },
                    egui::FontId::proportional(24.0),
                    TEXT_PRIMARY,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(player.to_string().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.is_ai_thinking() {
                        ("AI thinking...".to_string(), TIMER_WARNING)
                    } else if self.state.game_over.is_some() {
                        ("Game Over".to_string(), SUGGESTION_MARKER)
                    } else {
                        let moves = self.state.legal_moves().len();
                        (format!("{moves} legal moves"), TIMER_NORMAL)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let limit = self.state.settings.time_limit_ms as f32 / 1000.0;
                let secs = elapsed.as_secs_f32();
                let color = if secs < limit * 0.6 {
                    TIMER_NORMAL
                } else if secs < limit {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{secs:.2}s")).size(28.0).strong().color(color));
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32())).size(10.0).color(TEXT_SECONDARY));
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Undo (U)").clicked() {
                    self.state.undo();
                }
                if ui.button("New (N)").clicked() {
                    self.new_game(self.state.mode);
                }
                if let GameMode::PvP { .. } = self.state.mode {
                    if ui.button("Hint (H)").clicked() {
                        self.state.request_suggestion();
                    }
                }
            });

            if let GameMode::PvP { show_suggestions } = &mut self.state.mode {
                ui.checkbox(show_suggestions, "Suggest every turn");
            }

            ui.add_space(8.0);
            ui.label(RichText::new(format!("Move #{}", self.state.move_history.len())).size(11.0).color(TEXT_SECONDARY));
        });
    }

    /// Engine options; they apply from the next engine move
    fn render_settings_card(&mut self, ui: &mut egui::Ui) {
        let thinking = self.state.is_ai_thinking();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SEARCH SETTINGS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.add_enabled_ui(!thinking, |ui| {
                let settings = &mut self.state.settings;
                let config = &mut settings.config;

                egui::ComboBox::from_label("Algorithm")
                    .selected_text(config.algorithm.name())
                    .show_ui(ui, |ui| {
                        for algorithm in Algorithm::ALL {
                            ui.selectable_value(&mut config.algorithm, algorithm, algorithm.name());
                        }
                    });

                egui::ComboBox::from_label("Evaluator")
                    .selected_text(config.evaluator.name())
                    .show_ui(ui, |ui| {
                        for evaluator in Evaluator::ALL {
                            ui.selectable_value(&mut config.evaluator, evaluator, evaluator.name());
                        }
                    });

                ui.checkbox(&mut config.iterative, "Iterative deepening");
                ui.add_enabled(
                    !config.iterative,
                    egui::Slider::new(&mut config.search_depth, 1..=10).text("Fixed depth"),
                );
                ui.add(
                    egui::Slider::new(&mut settings.time_limit_ms, 50..=10_000)
                        .logarithmic(true)
                        .suffix(" ms")
                        .text("Time limit"),
                );
                ui.add(
                    egui::Slider::new(&mut config.timeout_threshold_ms, 1.0..=100.0)
                        .suffix(" ms")
                        .text("Threshold"),
                );

                let mut side = self.state.board_side();
                if ui
                    .add(egui::Slider::new(&mut side, 3..=MAX_SIDE).text("Board (new game)"))
                    .changed()
                {
                    self.state.set_board_side(side);
                }
            });
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                let Some(result) = &self.state.last_ai_result else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                    return;
                };

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(format!("{:?}", result.search_type)).size(11.0).strong().color(TIMER_NORMAL));
                        ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                        ui.label(RichText::new(format!("Depth: {}", result.depth)).size(10.0).color(TEXT_SECONDARY));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                            ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                        });
                    });
                });

                if let Some(pos) = result.best_move {
                    let col = (b'A' + pos.col) as char;
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("-> {col}{}", pos.row)).size(12.0).strong().color(SUGGESTION_MARKER));
                }
            });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: &GameResult) {
        let (accent, _) = token_colors(result.winner);
        let how = match result.win_type {
            WinType::Isolation => "isolation",
            WinType::Forfeit => "forfeit on time",
            WinType::Resignation => "resignation",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(result.winner.to_string().to_uppercase()).size(18.0).strong().color(accent));
                    ui.label(RichText::new("WINS!").size(14.0).color(TEXT_PRIMARY));
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("by {how}")).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);

                    if ui.button("New Game").clicked() {
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
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let overlay = Overlay {
                last_move: self.state.last_move,
                suggested_move: self.state.suggested_move,
                show_legal_moves: self.show_legal_moves && self.state.is_human_turn(),
                game_over: self.state.game_over.is_some(),
            };

            if let Some(pos) = self.board_view.show(ui, &self.state.board, overlay) {
                match self.state.try_move(pos) {
                    Ok(()) => self.after_human_move(),
                    Err(msg) => self.state.message = Some(msg),
                }
            }
        });
    }

    /// Hotseat games can ask for a hint after each move
    fn after_human_move(&mut self) {
        if let GameMode::PvP { show_suggestions: true } = self.state.mode {
            if self.state.game_over.is_none() {
                self.state.request_suggestion();
            }
        }
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (debug, hint, undo, new) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
            )
        });

        if debug {
            self.show_debug = !self.show_debug;
        }
        if hint {
            if let GameMode::PvP { .. } = self.state.mode {
                self.state.request_suggestion();
            }
        }
        if undo {
            self.state.undo();
        }
        if new {
            self.new_game(self.state.mode);
        }
    }
}

impl eframe::App for IsolationApp {
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
