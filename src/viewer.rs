use eframe::egui;
use eframe::egui::{pos2, vec2, Align2, Color32, FontId, Pos2, Rect, Rounding, Sense, Stroke};
use gomoku10::config::{
    CANVAS_SIZE, CELL_SIZE, GRID_SIZE, MARK_FONT_SIZE, STATUS_FONT_SIZE, STATUS_MARGIN,
};
use gomoku10::game::{Coord, GameState, Mark, StatusPlacement};
use gomoku10::util::transforms::Letterbox;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

const HIGHLIGHT: Color32 = Color32::from_rgb(255, 236, 150);

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([CANVAS_SIZE, CANVAS_SIZE])
            .with_min_inner_size([CANVAS_SIZE / 2.0, CANVAS_SIZE / 2.0]),
        ..Default::default()
    };
    info!("opening game window");
    eframe::run_native(
        "Gomoku",
        native_options,
        Box::new(|cc| Box::new(GomokuApp::new(cc))),
    )
    .inspect_err(|err| error!(%err, "eframe failed to start"))
}

fn canvas_rect() -> Rect {
    Rect::from_min_size(Pos2::ZERO, vec2(CANVAS_SIZE, CANVAS_SIZE))
}

/// The area of a cell on the canvas.
fn cell_rect(coord: Coord) -> Rect {
    Rect::from_min_size(
        pos2(coord.col() as f32 * CELL_SIZE, coord.row() as f32 * CELL_SIZE),
        vec2(CELL_SIZE, CELL_SIZE),
    )
}

fn mark_color(mark: Mark) -> Color32 {
    match mark {
        Mark::X => Color32::RED,
        Mark::O => Color32::BLUE,
    }
}

struct GomokuApp {
    state: GameState,
}

impl GomokuApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            state: GameState::new(),
        }
    }

    fn paint_game(&mut self, ui: &mut egui::Ui) {
        let canvas_to_screen = Letterbox::fit(canvas_rect(), ui.max_rect());
        let board_rect = canvas_to_screen.to_screen_rect(canvas_rect());

        // input first, so this frame already draws the result
        let response = ui.allocate_rect(board_rect, Sense::click());
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let pos = canvas_to_screen.to_canvas(pos);
                let transition = self.state.handle_click(pos.x, pos.y);
                debug!(?transition, x = pos.x, y = pos.y, "click");
            }
        }

        let painter = ui.painter_at(board_rect);
        let at = |p: Pos2| canvas_to_screen.to_screen(p);

        // background
        painter.rect(board_rect, Rounding::ZERO, Color32::WHITE, Stroke::NONE);

        if let Some(line) = self.state.winning_line() {
            for &coord in &line.cells {
                painter.rect_filled(
                    canvas_to_screen.to_screen_rect(cell_rect(coord)),
                    Rounding::ZERO,
                    HIGHLIGHT,
                );
            }
        }

        // grid lines, including the outer border
        let grid_stroke = Stroke::new(1.0, Color32::BLACK);
        for i in 0..=GRID_SIZE {
            let d = i as f32 * CELL_SIZE;
            painter.line_segment([at(pos2(d, 0.0)), at(pos2(d, CANVAS_SIZE))], grid_stroke);
            painter.line_segment([at(pos2(0.0, d)), at(pos2(CANVAS_SIZE, d))], grid_stroke);
        }

        let mark_font = FontId::proportional(canvas_to_screen.scale_len(MARK_FONT_SIZE));
        for (coord, cell) in self.state.board().iter() {
            let Some(mark) = cell else { continue };
            painter.text(
                at(cell_rect(coord).center()),
                Align2::CENTER_CENTER,
                mark,
                mark_font.clone(),
                mark_color(mark),
            );
        }

        let status = self.state.status();
        let status_font = FontId::proportional(canvas_to_screen.scale_len(STATUS_FONT_SIZE));
        let headline_pos = match status.placement {
            StatusPlacement::Center => pos2(CANVAS_SIZE / 2.0, CANVAS_SIZE / 2.0),
            StatusPlacement::Top => pos2(CANVAS_SIZE / 2.0, STATUS_MARGIN),
        };
        painter.text(
            at(headline_pos),
            Align2::CENTER_CENTER,
            status.headline,
            status_font.clone(),
            Color32::BLACK,
        );
        if let Some(footer) = status.footer {
            painter.text(
                at(pos2(CANVAS_SIZE / 2.0, CANVAS_SIZE - STATUS_MARGIN)),
                Align2::CENTER_CENTER,
                footer,
                status_font,
                Color32::BLACK,
            );
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::from_gray(40)))
            .show(ctx, |ui| self.paint_game(ui));
    }

    /// eframe owns the frame loop, so closing the window stops painting and
    /// input handling together.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!(
            phase = ?self.state.phase(),
            moves = self.state.moves(),
            "game window closed"
        );
    }
}
