pub mod core {
    pub mod config;
    pub mod error;
    pub mod session;
    pub mod startup;
    pub mod state;
    pub mod tracing_init;
}

pub mod models {
    pub mod club;
    pub mod user;
}

pub mod stores {
    pub mod club_store;
    pub mod membership;
    pub mod seed;
}

pub mod storage {
    pub mod local_store;
    pub mod sync;
}

pub mod handlers {
    pub mod join;
    pub mod search;
    pub mod session;
}

pub mod validation {
    pub mod login;
}

pub mod utils {
    pub mod time;
}
