use crate::command::Command;
use crate::consts;
use crate::game::controller::{LoopController, Renderer, Timeline};
use crate::view::TerminalRenderer;
use crossterm::event::{poll, read, Event};
use log::{debug, info};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;

/// The terminal host: supplies frame timestamps from a monotonic clock and
/// turns key presses into turn requests
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    controller: LoopController<R>,
    timeline: Timeline,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(controller: LoopController<R>) -> App<R> {
        App {
            controller,
            timeline: Timeline::new(),
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, terminal: Terminal<B>) -> io::Result<()> {
        let mut renderer = TerminalRenderer::new(terminal);
        let epoch = Instant::now();
        self.controller.start(&mut self.timeline);
        while !self.quitting {
            self.controller
                .pump(&mut self.timeline, epoch.elapsed(), &mut renderer)?;
            if poll(consts::FRAME_PERIOD)? {
                self.handle_event(read()?, &mut renderer)?;
            }
        }
        info!(
            "Quitting while {:?} with score {}",
            self.controller.state(),
            self.controller.session().score()
        );
        Ok(())
    }

    fn handle_event<V: Renderer + ?Sized>(
        &mut self,
        event: Event,
        renderer: &mut V,
    ) -> Result<(), V::Error> {
        if let Event::Resize(width, height) = event {
            debug!("Terminal resized to {width}x{height}");
            return renderer.render(&self.controller.session().scene());
        }
        let Some(key) = event.as_key_press_event() else {
            return Ok(());
        };
        match Command::from_key_event(key) {
            Some(Command::Quit) => self.quitting = true,
            Some(Command::Turn(direction)) => {
                self.controller.request_turn(direction);
                let snake = self.controller.session().snake();
                debug!(
                    "Turn {direction:?} requested while heading {:?}; pending turn is {:?}",
                    snake.direction(),
                    snake.pending()
                );
            }
            None => (),
        }
        Ok(())
    }
}
