pub mod core {
    pub mod ballistics;
    pub mod error;
    pub mod session;
    pub mod window;
}

pub mod plot;
