use glam::Vec2;

use crate::session::Session;

// Character-cell canvas; world coordinates scale down onto it.
const COLS: usize = 80;
const ROWS: usize = 30;

// World-unit spacing of the reference grid lines
const GRID_SPACING: f32 = 50.0;

/// Render the world as an ASCII frame: reference grid, trail dots and the
/// ball, with the position/velocity readout lines above it.
pub fn render_frame(session: &Session) -> String {
    let mut canvas = vec![vec![' '; COLS]; ROWS];

    draw_grid(&mut canvas, session);

    for pos in session.trail.iter() {
        if let Some((row, col)) = to_cell(session, *pos) {
            canvas[row][col] = '.';
        }
    }

    if let Some((pos, _vel)) = session.projectile() {
        if let Some((row, col)) = to_cell(session, pos) {
            canvas[row][col] = 'O';
        }
    }

    let mut out = String::new();
    for line in status_lines(session) {
        out.push_str(&line);
        out.push('\n');
    }
    for row in canvas {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// The two on-screen text readouts
pub fn status_lines(session: &Session) -> [String; 2] {
    match session.projectile() {
        Some((pos, vel)) => [
            format!("pos: ({:.2}, {:.2})", pos.x, pos.y),
            format!("vel: ({:.2}, {:.2})", vel.x, vel.y),
        ],
        None => ["pos: -".to_string(), "vel: -".to_string()],
    }
}

fn draw_grid(canvas: &mut [Vec<char>], session: &Session) {
    let width = session.config.world_width;
    let height = session.config.world_height;

    let mut x = 0.0;
    while x <= width {
        if let Some((_, col)) = to_cell(session, Vec2::new(x, 0.0)) {
            for row in canvas.iter_mut() {
                row[col] = '|';
            }
        }
        x += GRID_SPACING;
    }

    let mut y = 0.0;
    while y <= height {
        if let Some((row, _)) = to_cell(session, Vec2::new(0.0, y)) {
            for cell in canvas[row].iter_mut() {
                *cell = if *cell == '|' { '+' } else { '-' };
            }
        }
        y += GRID_SPACING;
    }
}

/// Map a world position onto the canvas; None when off screen
fn to_cell(session: &Session, pos: Vec2) -> Option<(usize, usize)> {
    let width = session.config.world_width;
    let height = session.config.world_height;
    if pos.x < 0.0 || pos.x > width || pos.y < 0.0 || pos.y > height {
        return None;
    }
    let col = (pos.x / width * (COLS - 1) as f32).round() as usize;
    let row = (pos.y / height * (ROWS - 1) as f32).round() as usize;
    Some((row.min(ROWS - 1), col.min(COLS - 1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_core::Config;

    #[test]
    fn test_status_lines_format_readouts() {
        let session = Session::new(Config::new());
        let [pos_line, vel_line] = status_lines(&session);
        assert_eq!(pos_line, "pos: (100.00, 290.00)");
        assert!(vel_line.starts_with("vel: (43.30, -25.00"), "got {}", vel_line);
    }

    #[test]
    fn test_frame_contains_grid_and_ball() {
        let session = Session::new(Config::new());
        let frame = render_frame(&session);
        assert!(frame.contains('O'), "Ball glyph is drawn");
        assert!(frame.contains('+'), "Grid intersections are drawn");
        assert!(frame.contains('|') && frame.contains('-'), "Grid lines are drawn");
    }

    #[test]
    fn test_trail_points_appear_after_steps() {
        let mut session = Session::new(Config::new());
        for _ in 0..200 {
            session.step_once();
        }
        let frame = render_frame(&session);
        assert!(frame.contains('.'), "Trail markers are drawn");
    }

    #[test]
    fn test_offscreen_positions_are_skipped() {
        let session = Session::new(Config::new());
        assert_eq!(to_cell(&session, Vec2::new(-1.0, 10.0)), None);
        assert_eq!(to_cell(&session, Vec2::new(10.0, 1000.0)), None);
        assert!(to_cell(&session, Vec2::new(0.0, 0.0)).is_some());
    }
}
