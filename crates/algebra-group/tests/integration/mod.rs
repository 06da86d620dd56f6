mod classification;
mod user_defined;
