mod activities;
mod health_check;
mod helpers;
