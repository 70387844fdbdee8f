mod helpers;
mod home;
mod waitlist;
