use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Renderer that draws nothing, used by tests and headless hosts.
///
/// It still validates every frame and keeps the last one so tests can inspect
/// the geometry a real backend would receive.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
