use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;

use color_eyre::eyre::Result;
use futures::future;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::prelude::*;

use crate::infrastructure::tui::{Event, Frame, TuiLike};

/// Terminal double backed by [`TestBackend`].
/// - enter/exit only flip a flag (no raw mode / alternate screen).
/// - next() pops from an internal queue and never blocks.
/// - draw() counts frames for assertions.
pub struct TestTui {
    term: Terminal<TestBackend>,
    events: VecDeque<Event>,
    draws: usize,
    entered: bool,
    suspensions: usize,
}

impl TestTui {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let backend = TestBackend::new(width, height);
        let term = Terminal::new(backend)?;
        Ok(Self {
            term,
            events: VecDeque::new(),
            draws: 0,
            entered: false,
            suspensions: 0,
        })
    }

    pub fn with_events(
        width: u16,
        height: u16,
        events: impl IntoIterator<Item = Event>,
    ) -> Result<Self> {
        let mut this = Self::new(width, height)?;
        this.events.extend(events);
        Ok(this)
    }

    pub fn draw_count(&self) -> usize {
        self.draws
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    pub fn suspension_count(&self) -> usize {
        self.suspensions
    }

    pub fn enqueue_event(&mut self, ev: Event) {
        self.events.push_back(ev);
    }

    /// Last drawn frame
    pub fn buffer(&self) -> &Buffer {
        self.term.backend().buffer()
    }

    /// Last drawn frame as plain text, one line per row
    pub fn screen_text(&self) -> String {
        let buffer = self.buffer();
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }
}

impl TuiLike for TestTui {
    fn enter(&mut self) -> Result<()> {
        self.entered = true;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.entered = false;
        Ok(())
    }

    fn suspend(&mut self) -> Result<()> {
        self.suspensions += 1;
        self.exit()
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.term.draw(|frame| f(frame))?;
        self.draws += 1;
        Ok(())
    }

    fn resize(&mut self, area: Rect) -> Result<()> {
        self.term.backend_mut().resize(area.width, area.height);
        self.term.resize(area)?;
        Ok(())
    }

    fn size(&self) -> Result<Size> {
        Ok(self.term.size()?)
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        let ev = self.events.pop_front();
        Box::pin(future::ready(ev))
    }
}
