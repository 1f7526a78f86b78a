fn main() {
    naivedya_web::start();
}
