pub trait LineWriter {
    fn write_line(&self, line: &str);

    fn write_lines(&self, text: &str) {
        for line in text.lines() {
            self.write_line(line);
        }
    }
}

#[derive(Clone, Copy)]
pub struct StdoutLineWriter;
impl LineWriter for StdoutLineWriter {
    fn write_line(&self, line: &str) {
        println!("{}", line);
    }
}
