mod helpers;
mod protected;
