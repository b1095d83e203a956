//! The city reference list.
//!
//! Enumeration order is fixed (roughly by population) and is part of the
//! search contract: prefix matches and word matches are both returned in
//! this order.

pub const CITIES: &[&str] = &[
    "Москва",
    "Санкт-Петербург",
    "Новосибирск",
    "Екатеринбург",
    "Казань",
    "Нижний Новгород",
    "Челябинск",
    "Самара",
    "Омск",
    "Ростов-на-Дону",
    "Уфа",
    "Красноярск",
    "Воронеж",
    "Пермь",
    "Волгоград",
    "Краснодар",
    "Саратов",
    "Тюмень",
    "Тольятти",
    "Ижевск",
    "Барнаул",
    "Ульяновск",
    "Иркутск",
    "Хабаровск",
    "Ярославль",
    "Владивосток",
    "Махачкала",
    "Томск",
    "Оренбург",
    "Кемерово",
    "Новокузнецк",
    "Рязань",
    "Астрахань",
    "Набережные Челны",
    "Пенза",
    "Киров",
    "Липецк",
    "Чебоксары",
    "Балашиха",
    "Калининград",
    "Тула",
    "Курск",
    "Севастополь",
    "Сочи",
    "Ставрополь",
    "Улан-Удэ",
    "Тверь",
    "Магнитогорск",
    "Иваново",
    "Брянск",
    "Белгород",
    "Сургут",
    "Владимир",
    "Чита",
    "Нижний Тагил",
    "Архангельск",
    "Симферополь",
    "Калуга",
    "Смоленск",
    "Волжский",
    "Якутск",
    "Саранск",
    "Череповец",
    "Курган",
    "Вологда",
    "Орёл",
    "Подольск",
    "Грозный",
    "Владикавказ",
    "Тамбов",
    "Мурманск",
    "Петрозаводск",
    "Стерлитамак",
    "Нижневартовск",
    "Кострома",
    "Новороссийск",
    "Йошкар-Ола",
    "Химки",
    "Таганрог",
    "Комсомольск-на-Амуре",
    "Сыктывкар",
    "Нижнекамск",
    "Нальчик",
    "Шахты",
    "Дзержинск",
    "Орск",
    "Братск",
    "Энгельс",
    "Ангарск",
    "Благовещенск",
    "Королёв",
    "Великий Новгород",
    "Старый Оскол",
    "Мытищи",
    "Псков",
    "Люберцы",
    "Южно-Сахалинск",
    "Бийск",
    "Прокопьевск",
    "Армавир",
    "Балаково",
    "Рыбинск",
    "Абакан",
    "Северодвинск",
    "Петропавловск-Камчатский",
    "Норильск",
    "Уссурийск",
    "Волгодонск",
    "Сызрань",
    "Каменск-Уральский",
    "Новочеркасск",
    "Златоуст",
    "Электросталь",
    "Альметьевск",
    "Салават",
    "Миасс",
    "Керчь",
    "Находка",
    "Копейск",
    "Пятигорск",
    "Рубцовск",
    "Березники",
    "Коломна",
    "Майкоп",
    "Хасавюрт",
    "Одинцово",
    "Ковров",
    "Красногорск",
    "Нефтекамск",
    "Новомосковск",
    "Кисловодск",
    "Серпухов",
    "Нефтеюганск",
    "Первоуральск",
    "Черкесск",
    "Новочебоксарск",
    "Невинномысск",
    "Димитровград",
    "Дербент",
    "Обнинск",
    "Батайск",
    "Каспийск",
    "Назрань",
    "Кызыл",
    "Октябрьский",
    "Новый Уренгой",
    "Щёлково",
    "Северск",
    "Ессентуки",
    "Домодедово",
    "Ачинск",
    "Сергиев Посад",
    "Елец",
    "Ноябрьск",
    "Арзамас",
    "Элиста",
    "Раменское",
    "Бердск",
    "Новокуйбышевск",
    "Долгопрудный",
    "Реутов",
    "Жуковский",
    "Камышин",
    "Муром",
    "Евпатория",
    "Пушкино",
    "Артём",
    "Междуреченск",
    "Ленинск-Кузнецкий",
    "Сарапул",
    "Ногинск",
    "Ханты-Мансийск",
    "Воткинск",
    "Великие Луки",
    "Михайловск",
    "Серов",
    "Гатчина",
    "Соликамск",
    "Глазов",
    "Магадан",
    "Канск",
    "Каменск-Шахтинский",
    "Мичуринск",
    "Бузулук",
    "Озёрск",
    "Балашов",
    "Новоуральск",
    "Кинешма",
    "Юрга",
    "Черногорск",
    "Усть-Илимск",
    "Зеленодольск",
    "Анжеро-Судженск",
    "Новошахтинск",
    "Минеральные Воды",
    "Кириши",
    "Воркута",
    "Геленджик",
    "Клин",
    "Анапа",
    "Биробиджан",
    "Тобольск",
    "Саров",
    "Орехово-Зуево",
    "Ухта",
    "Бугульма",
    "Усолье-Сибирское",
    "Выборг",
    "Кропоткин",
    "Чайковский",
    "Горно-Алтайск",
    "Салехард",
    "Нарьян-Мар",
    "Гусь-Хрустальный",
    "Сосновый Бор",
    "Наро-Фоминск",
    "Переславль-Залесский",
    "Вышний Волочёк",
    "Павловский Посад",
    "Лодейное Поле",
    "Анадырь",
];

/// Curated subset shown when the client has typed nothing yet.
pub const POPULAR: &[&str] = &[
    "Москва",
    "Санкт-Петербург",
    "Новосибирск",
    "Екатеринбург",
    "Казань",
    "Нижний Новгород",
    "Челябинск",
    "Самара",
    "Омск",
    "Ростов-на-Дону",
    "Уфа",
    "Красноярск",
    "Воронеж",
    "Пермь",
    "Волгоград",
];
