mod contact;
mod validation;
