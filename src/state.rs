use std::cell::RefCell;
use std::rc::Rc;

use crate::config::Config;
use crate::rng::RandomSource;
use crate::starfield::StarField;

pub struct SceneState {
    pub config: Config,
    pub field: StarField,
    pub rng: Box<dyn RandomSource>,

    // Diagnostic only
    pub cycle: u64,
    // Bumped per movement run; older frame callbacks stop when it moves on
    pub motion_run: u64,

    // Screen
    pub screen_w: f64,
    pub screen_h: f64,
}

impl SceneState {
    pub fn new(config: Config, mut rng: Box<dyn RandomSource>) -> Self {
        let field = StarField::new(&config, rng.as_mut());
        Self {
            config,
            field,
            rng,
            cycle: 0,
            motion_run: 0,
            screen_w: 0.0,
            screen_h: 0.0,
        }
    }
}

pub type SharedScene = Rc<RefCell<SceneState>>;

pub fn new_shared_scene(config: Config, rng: Box<dyn RandomSource>) -> SharedScene {
    Rc::new(RefCell::new(SceneState::new(config, rng)))
}
