mod assessment;
mod intro;
mod question;
mod results;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use assessment::AssessmentView;
pub use intro::IntroView;
pub use question::QuestionView;
pub use results::ResultsView;
pub use state::ViewError;
