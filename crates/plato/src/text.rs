//! Text-mode frames drawn from the renderer's live handles

use plato_core::render::{RecordingGateway, Renderable};
use plato_core::world::{CellType, CoordinateMapper, Window};

/// Character for a windowed cell with nothing drawn
const EMPTY: char = ' ';

/// Draw the window as one line per grid row.
///
/// Only what the gateway holds is drawn, so a cell the streamer forgot to
/// render shows up as a blank and a leaked handle outside the window is
/// reported.
pub fn render_frame(gateway: &RecordingGateway, mapper: &CoordinateMapper, window: &Window) -> String {
    let extent = window.extent();
    let (rows, cols) = (extent.x as usize, extent.y as usize);
    let mut frame = vec![EMPTY; rows * cols];

    for (renderable, position) in gateway.live() {
        let Ok(pos) = mapper.render_position_to_world_index(position) else {
            log::warn!("Live handle at non-finite position {}", position);
            continue;
        };
        if !window.contains(pos) {
            log::warn!("Live handle at ({}, {}) is outside the window", pos.x, pos.y);
            continue;
        }
        let local = pos - window.low();
        let slot = &mut frame[local.x as usize * cols + local.y as usize];
        match renderable {
            Renderable::Object(kind) => *slot = kind.glyph(),
            Renderable::Ground if *slot == EMPTY => *slot = CellType::Ground.glyph(),
            Renderable::Ground => {}
        }
    }

    frame
        .chunks(cols)
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use plato_core::render::RenderGateway;
    use plato_core::world::{WindowStreamer, WorldGrid, WorldParams};
    use glam::IVec2;

    fn params() -> WorldParams {
        WorldParams {
            world_size: 9,
            map_size: 3,
            unit: 5.0,
        }
    }

    #[test]
    fn test_frame_shows_window_contents() {
        let mut world = WorldGrid::new(9);
        world.set_kind(IVec2::new(3, 3), CellType::Tree).unwrap();
        world.set_kind(IVec2::new(4, 5), CellType::Water).unwrap();
        world.set_kind(IVec2::new(5, 4), CellType::Rock).unwrap();
        world.set_kind(IVec2::new(0, 0), CellType::Grass).unwrap();

        let mut streamer = WindowStreamer::new(world, &params(), RecordingGateway::new()).unwrap();
        streamer.populate();

        let frame = render_frame(streamer.gateway(), streamer.mapper(), streamer.window());
        assert_eq!(frame, "T..\n..~\n.o.");
    }

    #[test]
    fn test_frame_follows_slides() {
        let mut world = WorldGrid::new(9);
        world.set_kind(IVec2::new(2, 4), CellType::Grass).unwrap();

        let mut streamer = WindowStreamer::new(world, &params(), RecordingGateway::new()).unwrap();
        streamer.populate();
        assert!(!render_frame(streamer.gateway(), streamer.mapper(), streamer.window()).contains('"'));

        streamer.slide(plato_core::world::Direction::Up);
        let frame = render_frame(streamer.gateway(), streamer.mapper(), streamer.window());
        assert_eq!(frame.lines().next(), Some(".\"."));
    }

    #[test]
    fn test_missing_cells_are_blank() {
        let mut gateway = RecordingGateway::new();
        let mapper = CoordinateMapper::new(3, 5.0);
        let window = Window::centered(IVec2::new(1, 1), 3);
        let position = mapper.world_index_to_render_position(IVec2::new(1, 1), 0.0);
        let _ground = gateway.render_ground(position);

        assert_eq!(render_frame(&gateway, &mapper, &window), "   \n . \n   ");
    }
}
