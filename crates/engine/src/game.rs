//! The game: object setup, the per-frame pipeline and event resolution
//!
//! A frame runs these stages in a fixed order:
//!
//! 1. clear the canvas
//! 2. update (and draw) every live object, collecting their events
//! 3. detect collisions between registered kind pairs
//! 4. resolve `input ++ update ++ collision` events, in that order
//! 5. advance the camera
//! 6. rasterize the camera window into a [`Frame`]
//!
//! Only step 4 mutates the object manager. Resolution may end the run; the
//! frame that ends it still completes, and no further frame executes.

use std::time::Duration;

use tui_shooter_core::{
    BulletFactory, Camera, Canvas, CollisionEngine, ContactPoint, Event, ExplosionFactory,
    GameConfig, GameError, Object, ObjectId, ObjectManager, TextureRegistry, Viewport,
};
use tui_shooter_types::{
    Frame, InputSource, Key, Kind, MatchResult, Presenter, Sound, SoundSink,
};

use crate::clock::Clock;
use crate::profiler::Profiler;

/// Target frame rate of [`Game::run`]
pub const TARGET_FPS: u32 = 30;

pub struct Game<S: SoundSink> {
    canvas: Canvas,
    camera: Camera,
    objects: ObjectManager,
    collisions: CollisionEngine,
    bullets: BulletFactory,
    explosions: ExplosionFactory,
    sound: S,
    profiler: Option<Profiler>,
    color_pair: u8,
    frame_interval: Duration,
    running: bool,
    result: MatchResult,
}

impl<S: SoundSink> Game<S> {
    /// Build a game from a validated configuration.
    ///
    /// `config` should already be fitted to the terminal; `viewport.width`
    /// is the number of canvas columns visible at once.
    pub fn new(
        config: &GameConfig,
        textures: &TextureRegistry,
        viewport: Viewport,
        sound: S,
    ) -> Result<Self, GameError> {
        let [width, height] = config.canvas.size;
        let canvas = Canvas::new(width, height, viewport.width, config.canvas.inverse);

        let objects_config = &config.objects;
        let camera = Camera::new(0, objects_config.player.speed);

        let mut objects = ObjectManager::new();
        objects.add(Object::player(
            objects_config.player.start(),
            textures.get(&objects_config.player.sprite)?,
            objects_config.player.speed,
            config.player_ymax(),
        ))?;
        objects.add(Object::goal(
            objects_config.goal.start(),
            textures.get(&objects_config.goal.sprite)?,
        ))?;
        for block in &objects_config.block {
            objects.add(Object::block(block.start(), textures.get(&block.sprite)?))?;
        }
        for enemy in &objects_config.enemy {
            objects.add(Object::enemy(
                enemy.start(),
                textures.get(&enemy.sprite)?,
                enemy.fps,
            ))?;
        }

        let collisions = CollisionEngine::new(config.collision_registry()?);
        let bullets = BulletFactory::new(&objects_config.bullet);
        let explosions = ExplosionFactory::new(&objects_config.explosion, textures)?;

        Ok(Self {
            canvas,
            camera,
            objects,
            collisions,
            bullets,
            explosions,
            sound,
            profiler: config.debug.then(Profiler::new),
            color_pair: config.color_pair(),
            frame_interval: Duration::from_secs(1) / TARGET_FPS,
            running: true,
            result: MatchResult::Undetermined,
        })
    }

    /// Override the pacing of [`Game::run`]; zero disables it
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn result(&self) -> MatchResult {
        self.result
    }

    pub fn objects(&self) -> &ObjectManager {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut ObjectManager {
        &mut self.objects
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn sound(&self) -> &S {
        &self.sound
    }

    pub fn player(&self) -> Option<&Object> {
        self.objects.player()
    }

    /// Offer the polled key to the objects; `Quit` clears the run flag
    pub fn process_input(&mut self, key: Option<Key>) -> Vec<Event> {
        let Some(key) = key else {
            return Vec::new();
        };
        let events = self.objects.process_input(key);
        if key == Key::Quit {
            tracing::info!("quit requested");
            self.running = false;
        }
        events
    }

    /// Run one frame with `delta` seconds of elapsed time
    pub fn step(&mut self, delta: f64, input_events: Vec<Event>) -> Result<Frame, GameError> {
        if let Some(profiler) = &mut self.profiler {
            profiler.start();
        }

        self.canvas.clear();
        self.profile();

        let updates = self.objects.update(&mut self.canvas, delta);
        self.profile();

        let collisions: Vec<Event> = self.collisions.update(&self.objects).collect();
        self.profile();

        let mut events = input_events;
        events.extend(updates);
        events.extend(collisions);
        self.resolve(events)?;
        self.profile();

        self.camera.update(delta);
        self.profile();

        let rows = self.canvas.visible_rows(&self.camera);
        self.profile();

        let mut status = None;
        if let Some(profiler) = &mut self.profiler {
            tracing::info!("{}", profiler.dump());
            if delta > 0.0 {
                status = Some(format!("FPS: {:.2}", 1.0 / delta));
            }
        }

        Ok(Frame {
            rows,
            color_pair: self.color_pair,
            origin: (0, 0),
            status,
        })
    }

    /// Process `key` and run a frame, unless the run is already over
    pub fn tick(&mut self, delta: f64, key: Option<Key>) -> Result<Option<Frame>, GameError> {
        if !self.running {
            return Ok(None);
        }
        let input = self.process_input(key);
        self.step(delta, input).map(Some)
    }

    /// Poll, step and present until the run flag is cleared
    pub fn run<I, P>(&mut self, input: &mut I, presenter: &mut P) -> Result<MatchResult, GameError>
    where
        I: InputSource,
        P: Presenter,
    {
        let mut clock = Clock::new();
        while self.running {
            let delta = clock.lap();
            let key = input.poll()?;
            if let Some(frame) = self.tick(delta, key)? {
                presenter.present(&frame)?;
            }
            if let Some(rest) = self.frame_interval.checked_sub(clock.peek()) {
                std::thread::sleep(rest);
            }
        }
        tracing::info!(result = ?self.result, "run finished");
        Ok(self.result)
    }

    /// Apply a batch of events in order
    pub fn resolve(&mut self, events: Vec<Event>) -> Result<(), GameError> {
        for event in events {
            tracing::info!(?event, "resolving event");
            match event {
                Event::Collision {
                    collider,
                    collided,
                    contact,
                } => self.resolve_collision(collider, collided, contact)?,
                Event::AnimationEnded { sender } => self.resolve_animation_end(sender)?,
                Event::PlayerShoot { sender } => self.resolve_player_shoot(sender)?,
            }
        }
        Ok(())
    }

    fn resolve_collision(
        &mut self,
        collider: ObjectId,
        collided: ObjectId,
        contact: ContactPoint,
    ) -> Result<(), GameError> {
        let Some((collider_kind, center)) =
            self.objects.get(collider).map(|a| (a.kind(), a.center()))
        else {
            tracing::debug!(%collider, %collided, "skipping collision from a removed object");
            return Ok(());
        };
        let Some(collided_kind) = self.objects.get(collided).map(Object::kind) else {
            // Target removed earlier in this batch; a bullet that reached it is spent.
            if collider_kind == Kind::Bullet {
                tracing::debug!(%collider, %collided, "retiring bullet whose target was removed");
                self.objects.remove(collider);
            } else {
                tracing::debug!(%collider, %collided, "skipping collision with a removed object");
            }
            return Ok(());
        };
        tracing::debug!(x = contact.x, y = contact.y, "contact point");

        match (collider_kind, collided_kind) {
            (Kind::Bullet, Kind::Block) => {
                self.objects.remove(collider);
                self.objects.add(self.explosions.create(center))?;
                self.sound.play(Sound::BlockHit);
            }
            (Kind::Bullet, Kind::Enemy) => {
                self.objects.remove(collider);
                self.objects.remove(collided);
                self.objects.add(self.explosions.create(center))?;
                self.sound.play(Sound::SpiderHit);
            }
            (Kind::Player, Kind::Block) | (Kind::Player, Kind::Enemy) => {
                self.objects.remove(collider);
                self.objects.add(self.explosions.create(center))?;
                self.finish(MatchResult::Loss);
                self.sound.play(Sound::PlayerHit);
            }
            (Kind::Player, Kind::Goal) => {
                self.objects.remove(collider);
                self.finish(MatchResult::Win);
            }
            _ => {
                return Err(GameError::UnresolvableCollision {
                    collider,
                    collider_kind,
                    collided,
                    collided_kind,
                })
            }
        }
        Ok(())
    }

    fn resolve_animation_end(&mut self, sender: ObjectId) -> Result<(), GameError> {
        match self.objects.get(sender).map(Object::kind) {
            None => tracing::debug!(%sender, "animation sender already removed"),
            Some(Kind::Explosion) => {
                self.objects.remove(sender);
            }
            Some(kind) => return Err(GameError::UnexpectedAnimationSender { sender, kind }),
        }
        Ok(())
    }

    fn resolve_player_shoot(&mut self, sender: ObjectId) -> Result<(), GameError> {
        let Some(muzzle) = self.objects.get(sender).map(Object::muzzle) else {
            tracing::debug!(%sender, "dropping shot from a removed object");
            return Ok(());
        };
        self.objects.add(self.bullets.create(muzzle))?;
        self.sound.play(Sound::Shoot);
        Ok(())
    }

    fn finish(&mut self, result: MatchResult) {
        tracing::info!(?result, "run over");
        self.result = result;
        self.running = false;
    }

    fn profile(&mut self) {
        if let Some(profiler) = &mut self.profiler {
            profiler.tick();
        }
    }
}
