pub mod cta;
pub mod demo;
pub mod faq;
pub mod features;
pub mod footer;
pub mod hero;
pub mod testimonials;

pub use cta::CallToAction;
pub use demo::Demo;
pub use faq::Faq;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use testimonials::Testimonials;
