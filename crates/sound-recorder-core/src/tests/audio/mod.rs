mod capture;
mod clip;
mod session;
