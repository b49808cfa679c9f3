mod fade_timer;

pub use fade_timer::TokioFadeTimer;
