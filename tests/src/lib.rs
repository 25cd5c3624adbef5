mod calculator;
mod conversion;
