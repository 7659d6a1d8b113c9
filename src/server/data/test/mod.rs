mod book;
mod member;
mod order;
