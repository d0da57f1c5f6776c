use log::{debug, info};

use super::{Context, Scene, SceneKind, Transition};
use crate::math::Boundaries;

/// Ordered scene history. The last entry is the active scene and the only one
/// that gets `update`, `draw` and key events.
#[derive(Default)]
pub struct SceneStack {
    scenes: Vec<Box<dyn Scene>>,
}

impl SceneStack {
    pub fn new() -> Self {
        SceneStack::default()
    }

    pub fn push(&mut self, scene: Box<dyn Scene>) {
        self.scenes.push(scene);
    }

    pub fn pop(&mut self) -> Option<Box<dyn Scene>> {
        self.scenes.pop()
    }

    pub fn top(&self) -> Option<&dyn Scene> {
        self.scenes.last().map(|scene| scene.as_ref())
    }

    pub fn top_mut(&mut self) -> Option<&mut (dyn Scene + 'static)> {
        match self.scenes.last_mut() {
            Some(scene) => Some(scene.as_mut()),
            None => None,
        }
    }

    pub fn top_kind(&self) -> Option<SceneKind> {
        self.top().map(|scene| scene.kind())
    }

    pub fn clear(&mut self) {
        self.scenes.clear();
    }

    pub fn depth(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Bottom first.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Scene> {
        self.scenes.iter().map(|scene| scene.as_ref())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut (dyn Scene + 'static)> {
        self.scenes.iter_mut().map(|scene| scene.as_mut())
    }

    /// Tear down the current top, drop everything, then set up and push `scene`.
    pub fn go_to(&mut self, mut scene: Box<dyn Scene>, ctx: &mut Context) {
        let from = self.top_kind();
        if let Some(top) = self.top_mut() {
            top.teardown(ctx);
        }
        self.clear();
        scene.setup(ctx);
        info!("scene {:?} -> {:?}", from, scene.kind());
        self.push(scene);
    }

    /// Push an overlay. The scene beneath keeps its state untouched.
    pub fn push_scene(&mut self, mut scene: Box<dyn Scene>, ctx: &mut Context) {
        scene.setup(ctx);
        debug!("scene {:?} pushed over {:?}", scene.kind(), self.top_kind());
        self.push(scene);
    }

    /// Remove the overlay. The scene beneath resumes without a second `setup`.
    pub fn pop_scene(&mut self, ctx: &mut Context) -> Option<Box<dyn Scene>> {
        let mut scene = self.pop()?;
        scene.teardown(ctx);
        debug!("scene {:?} popped, resuming {:?}", scene.kind(), self.top_kind());
        Some(scene)
    }

    pub fn apply(&mut self, transition: Transition, ctx: &mut Context) {
        match transition {
            Transition::None => {}
            Transition::GoTo(scene) => self.go_to(scene, ctx),
            Transition::Push(scene) => self.push_scene(scene, ctx),
            Transition::Pop => {
                self.pop_scene(ctx);
            }
        }
    }

    /// Every scene on the stack sees the new field, not only the top.
    pub fn resize(&mut self, boundaries: &Boundaries) {
        for scene in self.iter_mut() {
            scene.on_resize(boundaries);
        }
    }
}
