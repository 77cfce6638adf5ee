mod appointments;
mod doctors;
mod helpers;
