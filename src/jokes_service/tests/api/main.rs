mod helpers;
mod jokes;
mod login;
mod logout;
mod pages;
