mod helpers;
mod verify_token;
