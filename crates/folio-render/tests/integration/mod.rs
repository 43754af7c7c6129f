mod properties;
mod run;
