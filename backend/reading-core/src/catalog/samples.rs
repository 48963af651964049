use models::Book;

/// Demo books from the Kenyan early-grade syllabus.
pub fn sample_books() -> Vec<Book> {
    vec![
        Book {
            id: 1,
            title: "Kiswahili Darasa la 1".to_string(),
            author: "Kenya Institute of Education".to_string(),
            level: "Grade 1".to_string(),
            language: "Kiswahili".to_string(),
            content: "Hapa kuna kitabu cha Kiswahili. Tunajifunza maneno mapya kila siku. \
                      Soma polepole na uelewa."
                .to_string(),
        },
        Book {
            id: 2,
            title: "English Reader Grade 2".to_string(),
            author: "Kenya Literature Bureau".to_string(),
            level: "Grade 2".to_string(),
            language: "English".to_string(),
            content: "This is a story about a little girl named Amina. She loves to read books \
                      every day. Reading helps her learn new words and ideas."
                .to_string(),
        },
        Book {
            id: 3,
            title: "My First Storybook".to_string(),
            author: "Longhorn Publishers".to_string(),
            level: "Grade 1".to_string(),
            language: "English".to_string(),
            content: "Once upon a time, there was a clever rabbit. The rabbit lived in a big \
                      forest with many other animals. Every day was a new adventure."
                .to_string(),
        },
    ]
}
