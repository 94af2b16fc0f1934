use ggez::event::EventHandler;
use ggez::graphics::{Canvas, Color, DrawParam, Text};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::{Context, GameError, GameResult};
use log::{debug, error};

use crate::basic::Point;
use crate::control::{Action, Controls, Steps};
use crate::prefs::{self, Prefs};
use crate::rendering::{HexagonView, Scene};
use crate::shape::Hexagon;

const HELP_POSITION: Point = Point::new(10., 10.);

pub struct App {
    view: HexagonView<Scene>,
    controls: Controls,
    steps: Steps,

    scene_origin: Point,
    background: Color,
    text_color: Color,
    help: Text,
}

impl App {
    pub fn new(prefs: &Prefs) -> Self {
        let controls = Controls::for_layout(prefs.layout);
        let hexagon = Hexagon::new(prefs.vertices);
        debug!("starting with centroid {:?}", hexagon.centroid());

        Self {
            view: HexagonView::new(Scene::new(), hexagon, prefs.view_style()),
            steps: Steps::from(prefs),
            help: Text::new(controls.help_text()),
            controls,

            scene_origin: prefs.scene_origin,
            background: prefs::color(prefs.palette.background),
            text_color: prefs::color(prefs.palette.text),
        }
    }

    pub fn handle(&mut self, action: Action) {
        debug!("{action:?}");
        match action.transform(self.steps) {
            Some(transform) => self.view.apply(transform),
            None => {
                let visible = self.view.fill_visible();
                self.view.set_fill_visible(!visible);
            }
        }
    }
}

impl EventHandler<GameError> for App {
    fn update(&mut self, _ctx: &mut Context) -> GameResult {
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, self.background);

        match self.view.sink_mut().mesh(ctx) {
            Ok(Some(mesh)) => canvas.draw(mesh, DrawParam::default().dest(self.scene_origin)),
            Ok(None) => {}
            // a bad frame is not worth closing the window over
            Err(e) => error!("failed to build the scene mesh: {e}"),
        }

        let help_param = DrawParam::default().dest(HELP_POSITION).color(self.text_color);
        canvas.draw(&self.help, help_param);

        canvas.finish(ctx)
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeated: bool) -> GameResult {
        if input.keycode == Some(KeyCode::Escape) {
            ctx.request_quit();
        } else if let Some(action) = input.keycode.and_then(|key| self.controls.action(key)) {
            self.handle(action);
        }
        Ok(())
    }
}
