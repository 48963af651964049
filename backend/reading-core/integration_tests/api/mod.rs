mod books;
mod feedback;
mod process_text;
mod server;
mod upload;
