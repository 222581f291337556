pub mod page_text;
