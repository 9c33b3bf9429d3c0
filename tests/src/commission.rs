mod export;
mod scenarios;
mod validation;
